// src/views/interactions.rs

use askama::Template;

use crate::models::crm::{Customer, Interaction};

#[derive(Template)]
#[template(path = "interactions/list.html")]
pub struct InteractionListTemplate {
    pub customer: Customer,
    pub interactions: Vec<Interaction>,
}

#[derive(Template)]
#[template(path = "interactions/form.html")]
pub struct InteractionFormTemplate {
    pub customer: Customer,
    pub action: String,
}

impl InteractionFormTemplate {
    pub fn new(customer: Customer) -> Self {
        let action = format!("/interactions/customers/{}", customer.id);
        Self { customer, action }
    }
}
