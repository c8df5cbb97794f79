pub mod request_repository;

pub use request_repository::{MySqlRequestRepository, RequestReader};
