pub mod models;

pub use models::{RateConfig, RideParameters, TimeOfDay};
