pub mod rate_config;
pub mod ride_parameters;

pub use rate_config::RateConfig;
pub use ride_parameters::{RideParameters, TimeOfDay};
