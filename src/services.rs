pub mod alert_service;
pub mod analytics_service;
pub mod product_service;
pub mod supplier_service;
