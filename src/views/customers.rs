// src/views/customers.rs

use askama::Template;

use crate::models::crm::Customer;

#[derive(Template)]
#[template(path = "customers/list.html")]
pub struct CustomerListTemplate {
    pub customers: Vec<Customer>,
}

/// Formulário de cliente, compartilhado entre criação e edição: o que muda
/// é o título, a action do POST e os valores pré-preenchidos.
#[derive(Template)]
#[template(path = "customers/form.html")]
pub struct CustomerFormTemplate {
    pub title: String,
    pub action: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub customer_type: String,
}

impl CustomerFormTemplate {
    pub fn blank() -> Self {
        Self {
            title: "Novo cliente".to_string(),
            action: "/customers".to_string(),
            name: String::new(),
            email: String::new(),
            contact_number: String::new(),
            address: String::new(),
            customer_type: String::new(),
        }
    }

    pub fn edit(customer: &Customer) -> Self {
        Self {
            title: format!("Editar cliente #{}", customer.id),
            action: format!("/customers/{}", customer.id),
            name: customer.name.clone(),
            email: customer.email.clone(),
            contact_number: customer.contact_number.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
            customer_type: customer.customer_type.clone(),
        }
    }
}
