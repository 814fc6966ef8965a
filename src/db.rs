pub mod analytics_repo;
pub use analytics_repo::AnalyticsRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod interaction_repo;
pub use interaction_repo::InteractionRepository;
pub mod lead_repo;
pub use lead_repo::LeadRepository;

use sqlx::SqlitePool;

use crate::common::error::AppError;

// Schema e seed embutidos no binário. O schema é idempotente (CREATE TABLE
// IF NOT EXISTS) e roda a cada boot.
const SCHEMA_SQL: &str = include_str!("db/schema.sql");
const SEED_SQL: &str = include_str!("db/seed.sql");

pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    tracing::info!("✅ Schema do banco de dados pronto");
    Ok(())
}

// Insere os dados de demonstração, mas só se o banco estiver vazio.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), AppError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::info!("Banco já possui {} clientes, seed ignorado", existing);
        return Ok(());
    }

    sqlx::raw_sql(SEED_SQL).execute(pool).await?;
    tracing::info!("✅ Dados de demonstração inseridos");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("opções de conexão inválidas")
        .foreign_keys(true);

    // Uma única conexão: cada conexão `sqlite::memory:` extra abriria um
    // banco separado e vazio.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("falha ao abrir banco em memória");

    init_schema(&pool).await.expect("falha ao criar schema");
    pool
}
