pub mod blood;
pub mod error;

pub use blood::{BloodGroup, BloodType, RhFactor};
pub use error::{AppError, Result};
