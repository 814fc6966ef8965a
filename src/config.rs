// src/config.rs

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::{env, str::FromStr, time::Duration};

use crate::{
    db::{
        self, AnalyticsRepository, CustomerRepository, InteractionRepository, LeadRepository,
    },
    services::{AnalyticsService, CustomerService, InteractionService, LeadService},
};

#[derive(Clone)]
pub struct AppState {
    pub customer_service: CustomerService,
    pub lead_service: LeadService,
    pub interaction_service: InteractionService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // SQLite embutido: sem DATABASE_URL definida, usamos um arquivo local
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://crm.db".to_string());

        let options = SqliteConnectOptions::from_str(&database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // O schema é recriado de forma idempotente a cada boot; não há migrações
        db::init_schema(&db_pool).await?;

        if env_flag("SEED_DEMO_DATA") {
            db::seed_demo_data(&db_pool).await?;
        }

        Ok(Self::wire(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    fn wire(db_pool: SqlitePool) -> Self {
        let lead_service = LeadService::new(LeadRepository::new(db_pool.clone()));
        let interaction_service =
            InteractionService::new(InteractionRepository::new(db_pool.clone()));
        // O serviço de clientes orquestra a exclusão em cascata, então
        // recebe os outros dois e o pool para abrir a transação.
        let customer_service = CustomerService::new(
            CustomerRepository::new(db_pool.clone()),
            lead_service.clone(),
            interaction_service.clone(),
            db_pool.clone(),
        );
        let analytics_service = AnalyticsService::new(AnalyticsRepository::new(db_pool));

        Self {
            customer_service,
            lead_service,
            interaction_service,
            analytics_service,
        }
    }

    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Self {
        Self::wire(db::test_pool().await)
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| {
            let v = v.trim().to_ascii_lowercase();
            v == "1" || v == "true" || v == "yes"
        })
        .unwrap_or(false)
}
