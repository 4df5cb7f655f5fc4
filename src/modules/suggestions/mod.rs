pub mod models;
pub mod services;

pub use models::{RateSuggestion, SuggestionStatus};
pub use services::RateSuggester;
