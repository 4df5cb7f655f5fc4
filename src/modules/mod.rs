pub mod fares;
pub mod payouts;
pub mod projections;
pub mod rates;
pub mod suggestions;
pub mod trips;
