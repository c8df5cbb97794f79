// Blood bags module

pub mod models;
pub mod repositories;

pub use models::BloodBag;
pub use repositories::{BloodBagReader, MySqlBloodBagRepository};
