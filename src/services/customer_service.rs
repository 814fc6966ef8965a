// src/services/customer_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::CustomerRepository,
    models::crm::Customer,
    services::{InteractionService, LeadService},
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
    lead_service: LeadService,
    interaction_service: InteractionService,
    pool: SqlitePool,
}

impl CustomerService {
    pub fn new(
        repo: CustomerRepository,
        lead_service: LeadService,
        interaction_service: InteractionService,
        pool: SqlitePool,
    ) -> Self {
        Self {
            repo,
            lead_service,
            interaction_service,
            pool,
        }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        contact_number: Option<&str>,
        address: Option<&str>,
        customer_type: &str,
    ) -> Result<Customer, AppError> {
        self.repo
            .create(name, email, contact_number, address, customer_type)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        self.repo.list_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Customer, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Cliente não encontrado."))
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        contact_number: Option<&str>,
        address: Option<&str>,
        customer_type: &str,
    ) -> Result<Customer, AppError> {
        self.repo
            .update(id, name, email, contact_number, address, customer_type)
            .await?
            .ok_or(AppError::NotFound("Cliente não encontrado."))
    }

    /// Exclui o cliente e tudo que pertence a ele. O schema não tem
    /// ON DELETE CASCADE de propósito: a remoção dos filhos acontece
    /// aqui, na ordem interações -> leads -> cliente, numa transação só.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // 1. O cliente existe? Se não, nada foi tocado ainda e o tx sofre
        //    rollback automático ao sair do escopo (drop).
        let found = self.repo.exists(&mut *tx, id).await?;
        if !found {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        // 2. Filhos primeiro, senão o DELETE do cliente viola as FKs.
        let interactions = self
            .interaction_service
            .delete_by_customer(&mut *tx, id)
            .await?;
        let leads = self.lead_service.delete_by_customer(&mut *tx, id).await?;

        // 3. Agora o cliente em si.
        self.repo.delete(&mut *tx, id).await?;

        // 4. Se chegou aqui, deu tudo certo. "Commita" a transação.
        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!(
            "🗑️ Cliente {} removido junto com {} leads e {} interações",
            id,
            leads,
            interactions
        );
        Ok(())
    }
}
