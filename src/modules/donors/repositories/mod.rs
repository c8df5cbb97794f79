pub mod donor_repository;

pub use donor_repository::{DonorReader, MySqlDonorRepository};
