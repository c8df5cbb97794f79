pub mod blood_bag_repository;

pub use blood_bag_repository::{BloodBagReader, MySqlBloodBagRepository};
