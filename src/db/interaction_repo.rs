// src/db/interaction_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::crm::{Interaction, InteractionWithCustomer},
};

// `type` é palavra reservada no Rust; toda consulta devolve a coluna
// como `type AS interaction_type`.
#[derive(Clone)]
pub struct InteractionRepository {
    pool: SqlitePool,
}

impl InteractionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registra uma interação com um cliente existente. O `time` já chega
    /// normalizado pelo serviço.
    pub async fn create(
        &self,
        customer_id: i64,
        time: DateTime<Utc>,
        interaction_type: &str,
        topic: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Interaction, AppError> {
        let interaction = sqlx::query_as::<_, Interaction>(
            r#"
            INSERT INTO interaction (customer_id, time, type, topic, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, customer_id, time, type AS interaction_type,
                      topic, notes, created_at
            "#,
        )
        .bind(customer_id)
        .bind(time)
        .bind(interaction_type)
        .bind(topic)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte violação de FK em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AppError::ForeignKeyViolation(format!(
                        "Cliente {} não existe.",
                        customer_id
                    ));
                }
                if db_err.is_unique_violation() || db_err.is_check_violation() {
                    return AppError::ConstraintViolation(db_err.message().to_string());
                }
            }
            e.into()
        })?;

        Ok(interaction)
    }

    /// Histórico de um cliente, interações mais recentes primeiro
    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Interaction>, AppError> {
        let interactions = sqlx::query_as::<_, Interaction>(
            r#"
            SELECT id, customer_id, time, type AS interaction_type,
                   topic, notes, created_at
            FROM interaction
            WHERE customer_id = ?
            ORDER BY time DESC, id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(interactions)
    }

    /// Últimas interações de todos os clientes, para o painel inicial
    pub async fn recent(&self, limit: i64) -> Result<Vec<InteractionWithCustomer>, AppError> {
        let interactions = sqlx::query_as::<_, InteractionWithCustomer>(
            r#"
            SELECT i.id, i.customer_id, c.name AS customer_name,
                   i.time, i.type AS interaction_type, i.topic
            FROM interaction i
            INNER JOIN customer c ON c.id = i.customer_id
            ORDER BY i.time DESC, i.id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(interactions)
    }

    /// Remove todas as interações de um cliente. Usado no fan-out de
    /// exclusão, dentro da transação do chamador.
    pub async fn delete_by_customer<'e, E>(
        &self,
        executor: E,
        customer_id: i64,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM interaction WHERE customer_id = ?")
            .bind(customer_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
