// src/services/analytics_service.rs

use crate::{
    common::error::AppError,
    db::AnalyticsRepository,
    models::analytics::{CategoryCountEntry, DashboardSummary, TimeBucketEntry},
};

// Camada fina sobre o repositório: as análises são só leitura e não têm
// regra de negócio além das próprias consultas.
#[derive(Clone)]
pub struct AnalyticsService {
    repo: AnalyticsRepository,
}

impl AnalyticsService {
    pub fn new(repo: AnalyticsRepository) -> Self {
        Self { repo }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        self.repo.summary().await
    }

    pub async fn customers_per_day(&self) -> Result<Vec<TimeBucketEntry>, AppError> {
        self.repo.customers_per_day().await
    }

    pub async fn leads_per_day(&self) -> Result<Vec<TimeBucketEntry>, AppError> {
        self.repo.leads_per_day().await
    }

    pub async fn customer_types(&self) -> Result<Vec<CategoryCountEntry>, AppError> {
        self.repo.customer_types().await
    }

    pub async fn lead_status(&self) -> Result<Vec<CategoryCountEntry>, AppError> {
        self.repo.lead_status().await
    }

    pub async fn lead_sources(&self) -> Result<Vec<CategoryCountEntry>, AppError> {
        self.repo.lead_sources().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{test_pool, CustomerRepository, InteractionRepository, LeadRepository},
        services::{InteractionService, LeadService},
    };
    use sqlx::SqlitePool;

    fn analytics_service(pool: &SqlitePool) -> AnalyticsService {
        AnalyticsService::new(AnalyticsRepository::new(pool.clone()))
    }

    #[tokio::test]
    async fn summary_counts_every_table() {
        let pool = test_pool().await;
        let service = analytics_service(&pool);
        let customers = CustomerRepository::new(pool.clone());
        let leads = LeadService::new(LeadRepository::new(pool.clone()));
        let interactions = InteractionService::new(InteractionRepository::new(pool.clone()));

        let a = customers
            .create("ACME", "a@acme.com", None, None, "Empresa")
            .await
            .unwrap();
        let b = customers
            .create("Bia", "bia@exemplo.com", None, None, "Individual")
            .await
            .unwrap();
        leads.create(a.id, "Site", "Novo", None, None).await.unwrap();
        leads
            .create(b.id, "Evento", "Qualificado", None, None)
            .await
            .unwrap();
        leads
            .create(b.id, "Site", "Perdido", None, None)
            .await
            .unwrap();
        // Sem `time` no payload a interação é registrada agora, ou seja, hoje.
        interactions
            .create(a.id, None, "Ligação", None, None)
            .await
            .unwrap();

        let summary = service.summary().await.expect("falha ao ler resumo");

        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.total_leads, 3);
        assert_eq!(summary.total_interactions, 1);
        assert_eq!(summary.interactions_today, 1);
    }

    #[tokio::test]
    async fn summary_of_empty_database_is_all_zeros() {
        let pool = test_pool().await;
        let service = analytics_service(&pool);

        let summary = service.summary().await.expect("falha ao ler resumo");

        assert_eq!(summary.total_customers, 0);
        assert_eq!(summary.total_leads, 0);
        assert_eq!(summary.total_interactions, 0);
        assert_eq!(summary.interactions_today, 0);
    }

    #[tokio::test]
    async fn customer_types_groups_and_counts() {
        let pool = test_pool().await;
        let service = analytics_service(&pool);
        let customers = CustomerRepository::new(pool.clone());

        for i in 0..3 {
            customers
                .create(
                    &format!("Empresa {}", i),
                    &format!("e{}@exemplo.com", i),
                    None,
                    None,
                    "Empresa",
                )
                .await
                .unwrap();
        }
        customers
            .create("Ana", "ana@exemplo.com", None, None, "Individual")
            .await
            .unwrap();

        let types = service
            .customer_types()
            .await
            .expect("falha ao agrupar tipos");

        assert_eq!(types.len(), 2);
        assert_eq!(types[0].category, "Empresa");
        assert_eq!(types[0].count, 3);
        assert_eq!(types[1].category, "Individual");
        assert_eq!(types[1].count, 1);
    }

    #[tokio::test]
    async fn lead_breakdowns_group_by_status_and_source() {
        let pool = test_pool().await;
        let service = analytics_service(&pool);
        let customers = CustomerRepository::new(pool.clone());
        let leads = LeadService::new(LeadRepository::new(pool.clone()));

        let c = customers
            .create("ACME", "a@acme.com", None, None, "Empresa")
            .await
            .unwrap();
        leads.create(c.id, "Site", "Novo", None, None).await.unwrap();
        leads.create(c.id, "Site", "Novo", None, None).await.unwrap();
        leads
            .create(c.id, "Evento", "Convertido", None, None)
            .await
            .unwrap();

        let status = service.lead_status().await.expect("falha ao agrupar status");
        assert_eq!(status[0].category, "Novo");
        assert_eq!(status[0].count, 2);

        let sources = service
            .lead_sources()
            .await
            .expect("falha ao agrupar origens");
        assert_eq!(sources[0].category, "Site");
        assert_eq!(sources[0].count, 2);
    }

    #[tokio::test]
    async fn per_day_series_buckets_todays_rows() {
        let pool = test_pool().await;
        let service = analytics_service(&pool);
        let customers = CustomerRepository::new(pool.clone());

        customers
            .create("ACME", "a@acme.com", None, None, "Empresa")
            .await
            .unwrap();
        customers
            .create("Bia", "bia@exemplo.com", None, None, "Individual")
            .await
            .unwrap();

        let series = service
            .customers_per_day()
            .await
            .expect("falha ao ler série");

        // Os dois clientes nasceram agora, então a série soma 2.
        assert!(!series.is_empty());
        assert_eq!(series.iter().map(|e| e.count).sum::<i64>(), 2);
    }
}
