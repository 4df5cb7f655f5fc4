pub mod models;
pub mod services;

pub use models::FareBreakdown;
pub use services::FareCalculator;
