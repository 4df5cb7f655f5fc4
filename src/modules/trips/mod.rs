pub mod models;

pub use models::TripRecord;
