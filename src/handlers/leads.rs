// src/handlers/leads.rs

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    views::leads::{LeadFormTemplate, LeadListTemplate},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormPayload {
    pub customer_id: i64,

    #[validate(length(min = 1, message = "A origem é obrigatória"))]
    pub source: String,

    #[validate(length(min = 1, message = "O status é obrigatório"))]
    pub status: String,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub topic: Option<String>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub notes: Option<String>,
}

// GET /leads
pub async fn list_page(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.lead_service.list_with_customers().await?;

    let page = LeadListTemplate { leads };
    Ok(Html(page.render()?))
}

// GET /leads/add
pub async fn add_page(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // O select do formulário precisa da lista de clientes
    let customers = app_state.customer_service.list_all().await?;

    let page = LeadFormTemplate::blank(customers);
    Ok(Html(page.render()?))
}

// GET /leads/{id}/edit
pub async fn edit_page(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.get_by_id(id).await?;
    let customers = app_state.customer_service.list_all().await?;

    let page = LeadFormTemplate::edit(&lead, customers);
    Ok(Html(page.render()?))
}

// POST /leads
pub async fn create(
    State(app_state): State<AppState>,
    Form(payload): Form<LeadFormPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .lead_service
        .create(
            payload.customer_id,
            &payload.source,
            &payload.status,
            payload.topic.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok(Redirect::to("/leads"))
}

// POST /leads/{id}
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Form(payload): Form<LeadFormPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .lead_service
        .update(
            id,
            payload.customer_id,
            &payload.source,
            &payload.status,
            payload.topic.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok(Redirect::to("/leads"))
}

// DELETE /leads/{id}
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.lead_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
