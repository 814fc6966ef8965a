// src/handlers/analytics.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState};

// Endpoints JSON só de leitura, consumidos pelos gráficos de /analytics.

// GET /api/analytics/customers-over-time
pub async fn customers_over_time(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.analytics_service.customers_per_day().await?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/analytics/leads-over-time
pub async fn leads_over_time(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.analytics_service.leads_per_day().await?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/analytics/customer-types
pub async fn customer_types(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.analytics_service.customer_types().await?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/analytics/lead-status
pub async fn lead_status(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.analytics_service.lead_status().await?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/analytics/lead-sources
pub async fn lead_sources(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.analytics_service.lead_sources().await?;

    Ok((StatusCode::OK, Json(data)))
}
