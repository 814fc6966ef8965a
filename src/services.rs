pub mod analytics_service;
pub use analytics_service::AnalyticsService;
pub mod customer_service;
pub use customer_service::CustomerService;
pub mod interaction_service;
pub use interaction_service::InteractionService;
pub mod lead_service;
pub use lead_service::LeadService;
