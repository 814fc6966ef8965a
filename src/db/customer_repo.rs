// src/db/customer_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::crm::Customer};

// Repositório de clientes, responsável por todas as interações com a tabela 'customer'
#[derive(Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Cria um cliente e devolve a linha completa, com os timestamps do banco
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        contact_number: Option<&str>,
        address: Option<&str>,
        customer_type: &str,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customer (name, email, contact_number, address, customer_type)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, contact_number, address, customer_type,
                      created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(contact_number)
        .bind(address)
        .bind(customer_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, contact_number, address, customer_type,
                   created_at, updated_at
            FROM customer
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, contact_number, address, customer_type,
                   created_at, updated_at
            FROM customer
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Atualiza um cliente. Devolve `None` quando o id não existe.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        contact_number: Option<&str>,
        address: Option<&str>,
        customer_type: &str,
    ) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customer
            SET name = ?, email = ?, contact_number = ?, address = ?,
                customer_type = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, name, email, contact_number, address, customer_type,
                      created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(contact_number)
        .bind(address)
        .bind(customer_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn exists<'e, E>(&self, executor: E, id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customer WHERE id = ?)")
            .bind(id)
            .fetch_one(executor)
            .await?;

        Ok(found)
    }

    /// Remove o cliente. Os filhos (leads e interações) já devem ter sido
    /// removidos na mesma transação.
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
