pub mod alerts;
pub mod analytics;
pub mod products;
pub mod suppliers;
