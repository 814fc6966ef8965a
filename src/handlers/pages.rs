// src/handlers/pages.rs

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::{
    common::error::AppError,
    config::AppState,
    views::pages::{AnalyticsTemplate, DashboardTemplate},
};

// Quantas interações aparecem no card "Últimas interações" do painel
const RECENT_INTERACTIONS: i64 = 5;

// GET /
pub async fn dashboard(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.analytics_service.summary().await?;
    let recent_interactions = app_state
        .interaction_service
        .recent(RECENT_INTERACTIONS)
        .await?;

    let page = DashboardTemplate {
        summary,
        recent_interactions,
    };
    Ok(Html(page.render()?))
}

// GET /analytics
pub async fn analytics() -> Result<impl IntoResponse, AppError> {
    let page = AnalyticsTemplate;
    Ok(Html(page.render()?))
}
