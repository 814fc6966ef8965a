// src/views/leads.rs

use askama::Template;

use crate::models::crm::{Customer, Lead, LeadWithCustomer};

#[derive(Template)]
#[template(path = "leads/list.html")]
pub struct LeadListTemplate {
    pub leads: Vec<LeadWithCustomer>,
}

/// Formulário de lead; `customers` alimenta o select do cliente dono e
/// `selected_customer_id` marca a opção atual (0 = nenhuma).
#[derive(Template)]
#[template(path = "leads/form.html")]
pub struct LeadFormTemplate {
    pub title: String,
    pub action: String,
    pub customers: Vec<Customer>,
    pub selected_customer_id: i64,
    pub source: String,
    pub status: String,
    pub topic: String,
    pub notes: String,
}

impl LeadFormTemplate {
    pub fn blank(customers: Vec<Customer>) -> Self {
        Self {
            title: "Novo lead".to_string(),
            action: "/leads".to_string(),
            customers,
            selected_customer_id: 0,
            source: String::new(),
            status: String::new(),
            topic: String::new(),
            notes: String::new(),
        }
    }

    pub fn edit(lead: &Lead, customers: Vec<Customer>) -> Self {
        Self {
            title: format!("Editar lead #{}", lead.id),
            action: format!("/leads/{}", lead.id),
            customers,
            selected_customer_id: lead.customer_id,
            source: lead.source.clone(),
            status: lead.status.clone(),
            topic: lead.topic.clone().unwrap_or_default(),
            notes: lead.notes.clone().unwrap_or_default(),
        }
    }
}
