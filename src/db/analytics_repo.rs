// src/db/analytics_repo.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    models::analytics::{CategoryCountEntry, DashboardSummary, TimeBucketEntry},
};

// Consultas de leitura para o painel e a página de análises. Nenhuma
// escrita acontece aqui.
#[derive(Clone)]
pub struct AnalyticsRepository {
    pool: SqlitePool,
}

impl AnalyticsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // 1. Resumo Geral (os cards do painel)
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        // Transação para ler as quatro contagens num snapshot consistente
        let mut tx = self.pool.begin().await?;

        let total_customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(&mut *tx)
            .await?;

        let total_leads: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lead")
            .fetch_one(&mut *tx)
            .await?;

        let total_interactions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM interaction")
            .fetch_one(&mut *tx)
            .await?;

        let interactions_today: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM interaction WHERE date(time) = date('now')")
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(DashboardSummary {
            total_customers,
            total_leads,
            total_interactions,
            interactions_today,
        })
    }

    // 2. Gráficos de linha (últimos 30 dias)
    pub async fn customers_per_day(&self) -> Result<Vec<TimeBucketEntry>, AppError> {
        let data = sqlx::query_as::<_, TimeBucketEntry>(
            r#"
            SELECT strftime('%Y-%m-%d', created_at) AS bucket, COUNT(*) AS count
            FROM customer
            WHERE created_at >= datetime('now', '-30 days')
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn leads_per_day(&self) -> Result<Vec<TimeBucketEntry>, AppError> {
        let data = sqlx::query_as::<_, TimeBucketEntry>(
            r#"
            SELECT strftime('%Y-%m-%d', created_at) AS bucket, COUNT(*) AS count
            FROM lead
            WHERE created_at >= datetime('now', '-30 days')
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }

    // 3. Distribuições por categoria (gráficos de pizza e barras)
    pub async fn customer_types(&self) -> Result<Vec<CategoryCountEntry>, AppError> {
        let data = sqlx::query_as::<_, CategoryCountEntry>(
            r#"
            SELECT customer_type AS category, COUNT(*) AS count
            FROM customer
            GROUP BY 1
            ORDER BY count DESC, category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn lead_status(&self) -> Result<Vec<CategoryCountEntry>, AppError> {
        let data = sqlx::query_as::<_, CategoryCountEntry>(
            r#"
            SELECT status AS category, COUNT(*) AS count
            FROM lead
            GROUP BY 1
            ORDER BY count DESC, category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn lead_sources(&self) -> Result<Vec<CategoryCountEntry>, AppError> {
        let data = sqlx::query_as::<_, CategoryCountEntry>(
            r#"
            SELECT source AS category, COUNT(*) AS count
            FROM lead
            GROUP BY 1
            ORDER BY count DESC, category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }
}
