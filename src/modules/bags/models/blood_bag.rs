use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{BloodGroup, BloodType, RhFactor};

/// One unit of donated blood.
///
/// A bag always services exactly one request and is tied to the donor who
/// gave it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BloodBag {
    /// Unique bag ID (UUID)
    pub id: String,

    /// Volume in millilitres
    pub quantity: i64,

    pub donation_date: NaiveDate,
    pub expiration_date: NaiveDate,

    #[sqlx(try_from = "String")]
    pub blood_type: BloodType,

    #[sqlx(try_from = "String")]
    pub rh: RhFactor,

    pub donor_id: String,
    pub request_id: String,
}

impl BloodBag {
    pub fn blood_group(&self) -> BloodGroup {
        BloodGroup::new(self.blood_type, self.rh)
    }
}
