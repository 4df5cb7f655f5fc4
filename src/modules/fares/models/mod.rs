pub mod fare_breakdown;

pub use fare_breakdown::FareBreakdown;
