pub mod analytics;
pub mod crm;
