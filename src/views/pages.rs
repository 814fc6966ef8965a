// src/views/pages.rs

use askama::Template;

use crate::models::analytics::DashboardSummary;
use crate::models::crm::InteractionWithCustomer;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub summary: DashboardSummary,
    pub recent_interactions: Vec<InteractionWithCustomer>,
}

/// Página de gráficos; os dados vêm dos endpoints JSON de /api/analytics.
#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate;
