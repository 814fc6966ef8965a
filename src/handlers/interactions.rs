// src/handlers/interactions.rs

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    views::interactions::{InteractionFormTemplate, InteractionListTemplate},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InteractionFormPayload {
    // Campo opcional: vazio significa "agora", decidido pelo serviço
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub time: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "O tipo é obrigatório"))]
    pub interaction_type: String,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub topic: Option<String>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub notes: Option<String>,
}

// Aceita RFC 3339 e os formatos do <input type="datetime-local">,
// interpretados como UTC.
fn parse_time(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(AppError::BadRequest(format!("Data/hora inválida: {}", raw)))
}

// GET /interactions/customers/{id}
pub async fn list_page(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    // 404 se o cliente não existe, mesmo com a lista vazia
    let customer = app_state.customer_service.get_by_id(id).await?;
    let interactions = app_state.interaction_service.find_by_customer(id).await?;

    let page = InteractionListTemplate {
        customer,
        interactions,
    };
    Ok(Html(page.render()?))
}

// GET /interactions/customer/{id}/add
pub async fn add_page(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let customer = app_state.customer_service.get_by_id(id).await?;

    let page = InteractionFormTemplate::new(customer);
    Ok(Html(page.render()?))
}

// POST /interactions/customers/{id}
pub async fn create(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Form(payload): Form<InteractionFormPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let time = payload.time.as_deref().map(parse_time).transpose()?;

    app_state
        .interaction_service
        .create(
            id,
            time,
            &payload.interaction_type,
            payload.topic.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok(Redirect::to(&format!("/interactions/customers/{}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_time_accepts_rfc3339() {
        let parsed = parse_time("2026-03-14T15:30:00-03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 18, 30, 0).unwrap());
    }

    #[test]
    fn parse_time_accepts_datetime_local() {
        let parsed = parse_time("2026-03-14T15:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap());
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(matches!(
            parse_time("ontem de manhã"),
            Err(AppError::BadRequest(_))
        ));
    }
}
