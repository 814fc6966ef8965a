// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// --- CLIENTE (a raiz do agregado) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub customer_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- LEAD ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub customer_id: i64,
    pub source: String,
    pub status: String,
    pub topic: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Linha da página /leads: o lead com o nome do cliente dono (JOIN).
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeadWithCustomer {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub source: String,
    pub status: String,
    pub topic: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- INTERAÇÃO ---

// A coluna `type` do banco vira `interaction_type` aqui (type é palavra
// reservada em Rust); os SELECTs fazem o alias.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: i64,
    pub customer_id: i64,
    pub time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub topic: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Interação com o nome do cliente, para o painel inicial.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InteractionWithCustomer {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub topic: Option<String>,
}
