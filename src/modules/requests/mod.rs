// Blood requests module

pub mod models;
pub mod repositories;

pub use models::BloodRequest;
pub use repositories::{MySqlRequestRepository, RequestReader};
