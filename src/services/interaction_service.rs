// src/services/interaction_service.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    db::InteractionRepository,
    models::crm::{Interaction, InteractionWithCustomer},
};

#[derive(Clone)]
pub struct InteractionService {
    repo: InteractionRepository,
}

impl InteractionService {
    pub fn new(repo: InteractionRepository) -> Self {
        Self { repo }
    }

    /// Registra uma interação. Sem `time` no payload, o momento atual é
    /// gravado; a coluna nunca fica nula.
    pub async fn create(
        &self,
        customer_id: i64,
        time: Option<DateTime<Utc>>,
        interaction_type: &str,
        topic: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Interaction, AppError> {
        let time = time.unwrap_or_else(Utc::now);

        self.repo
            .create(customer_id, time, interaction_type, topic, notes)
            .await
    }

    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Interaction>, AppError> {
        self.repo.find_by_customer(customer_id).await
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<InteractionWithCustomer>, AppError> {
        self.repo.recent(limit).await
    }

    /// Remove as interações de um cliente dentro da transação do chamador.
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
