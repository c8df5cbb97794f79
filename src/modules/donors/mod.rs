// Donors module

pub mod models;
pub mod repositories;

pub use models::Donor;
pub use repositories::{DonorReader, MySqlDonorRepository};
