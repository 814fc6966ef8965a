// src/db/lead_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    common::error::AppError,
    models::crm::{Lead, LeadWithCustomer},
};

#[derive(Clone)]
pub struct LeadRepository {
    pool: SqlitePool,
}

impl LeadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Cria um lead vinculado a um cliente existente
    pub async fn create(
        &self,
        customer_id: i64,
        source: &str,
        status: &str,
        topic: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO lead (customer_id, source, status, topic, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, customer_id, source, status, topic, notes,
                      created_at, updated_at
            "#,
        )
        .bind(customer_id)
        .bind(source)
        .bind(status)
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

        Ok(lead)
    }

    /// Lista todos os leads com o nome do cliente, mais recentes primeiro
    pub async fn list_with_customers(&self) -> Result<Vec<LeadWithCustomer>, AppError> {
        let leads = sqlx::query_as::<_, LeadWithCustomer>(
            r#"
            SELECT l.id, l.customer_id, c.name AS customer_name,
                   l.source, l.status, l.topic, l.created_at
            FROM lead l
            INNER JOIN customer c ON c.id = l.customer_id
            ORDER BY l.created_at DESC, l.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            SELECT id, customer_id, source, status, topic, notes,
                   created_at, updated_at
            FROM lead
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(lead)
    }

    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(
            r#"
            SELECT id, customer_id, source, status, topic, notes,
                   created_at, updated_at
            FROM lead
            WHERE customer_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    /// Atualiza um lead, inclusive o cliente dono. Devolve `None` quando o
    /// id não existe.
    pub async fn update(
        &self,
        id: i64,
        customer_id: i64,
        source: &str,
        status: &str,
        topic: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE lead
            SET customer_id = ?, source = ?, status = ?, topic = ?, notes = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, customer_id, source, status, topic, notes,
                      created_at, updated_at
            "#,
        )
        .bind(customer_id)
        .bind(source)
        .bind(status)
        .bind(topic)
        .bind(notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            // O update pode reapontar a FK, então a mesma conversão se aplica
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

        Ok(lead)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM lead WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove todos os leads de um cliente. Usado no fan-out de exclusão,
    /// dentro da transação do chamador.
    pub async fn delete_by_customer<'e, E>(
        &self,
        executor: E,
        customer_id: i64,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM lead WHERE customer_id = ?")
            .bind(customer_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
