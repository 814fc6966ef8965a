// src/handlers/customers.rs

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
    views::customers::{CustomerFormTemplate, CustomerListTemplate},
};

// O mesmo payload serve para criação e atualização; o formulário das duas
// telas é idêntico.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFormPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub name: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub contact_number: Option<String>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub address: Option<String>,

    #[validate(length(min = 1, message = "O tipo é obrigatório"))]
    pub customer_type: String,
}

// GET /customers
pub async fn list_page(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.customer_service.list_all().await?;

    let page = CustomerListTemplate { customers };
    Ok(Html(page.render()?))
}

// GET /customers/add
pub async fn add_page() -> Result<impl IntoResponse, AppError> {
    let page = CustomerFormTemplate::blank();
    Ok(Html(page.render()?))
}

// GET /customers/{id}/edit
pub async fn edit_page(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let customer = app_state.customer_service.get_by_id(id).await?;

    let page = CustomerFormTemplate::edit(&customer);
    Ok(Html(page.render()?))
}

// POST /customers
pub async fn create(
    State(app_state): State<AppState>,
    Form(payload): Form<CustomerFormPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .customer_service
        .create(
            &payload.name,
            &payload.email,
            payload.contact_number.as_deref(),
            payload.address.as_deref(),
            &payload.customer_type,
        )
        .await?;

    Ok(Redirect::to("/customers"))
}

// POST /customers/{id}
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Form(payload): Form<CustomerFormPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .customer_service
        .update(
            id,
            &payload.name,
            &payload.email,
            payload.contact_number.as_deref(),
            payload.address.as_deref(),
            &payload.customer_type,
        )
        .await?;

    Ok(Redirect::to("/customers"))
}

// DELETE /customers/{id}
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.customer_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
