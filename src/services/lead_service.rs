// src/services/lead_service.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::crm::{Lead, LeadWithCustomer},
};

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
}

impl LeadService {
    pub fn new(repo: LeadRepository) -> Self {
        Self { repo }
    }

    /// Cria um lead. O banco garante que o cliente existe; violação de FK
    /// vira `AppError::ForeignKeyViolation`.
    pub async fn create(
        &self,
        customer_id: i64,
        source: &str,
        status: &str,
        topic: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Lead, AppError> {
        self.repo
            .create(customer_id, source, status, topic, notes)
            .await
    }

    pub async fn list_with_customers(&self) -> Result<Vec<LeadWithCustomer>, AppError> {
        self.repo.list_with_customers().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Lead, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Lead não encontrado."))
    }

    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Lead>, AppError> {
        self.repo.find_by_customer(customer_id).await
    }

    pub async fn update(
        &self,
        id: i64,
        customer_id: i64,
        source: &str,
        status: &str,
        topic: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Lead, AppError> {
        self.repo
            .update(id, customer_id, source, status, topic, notes)
            .await?
            .ok_or(AppError::NotFound("Lead não encontrado."))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let removed = self.repo.delete(id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Lead não encontrado."));
        }
        Ok(())
    }

    /// Remove os leads de um cliente dentro da transação do chamador.
    /// Parte do fan-out de exclusão de cliente.
    pub async fn delete_by_customer<'e, E>(
        &self,
        executor: E,
        customer_id: i64,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.repo.delete_by_customer(executor, customer_id).await
    }
}
