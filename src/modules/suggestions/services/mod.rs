pub mod rate_suggester;

pub use rate_suggester::RateSuggester;
