pub mod models;
pub mod services;

pub use models::PayoutSplit;
pub use services::PayoutSplitter;
