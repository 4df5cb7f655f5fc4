pub mod rate_suggestion;

pub use rate_suggestion::{RateSuggestion, SuggestionStatus};
