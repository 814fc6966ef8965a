// src/models/analytics.rs

use serde::Serialize;
use sqlx::FromRow;

// 1. Resumo Geral (os cards do topo do painel)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_customers: i64,
    pub total_leads: i64,
    pub total_interactions: i64,
    pub interactions_today: i64,
}

// 2. Ponto de série temporal: {"bucket": "2026-08-22", "count": 3}
#[derive(Debug, Serialize, FromRow)]
pub struct TimeBucketEntry {
    pub bucket: String,
    pub count: i64,
}

// 3. Contagem por categoria: {"category": "Empresa", "count": 5}
#[derive(Debug, Serialize, FromRow)]
pub struct CategoryCountEntry {
    pub category: String,
    pub count: i64,
}
