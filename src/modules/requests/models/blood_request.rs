use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{BloodGroup, BloodType, RhFactor};

/// A health entity's ask for a quantity of a specific blood group by a due
/// date.
///
/// Rows carry the joined health-entity id and name so report functions never
/// need a separate entity fetch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BloodRequest {
    /// Unique request ID (UUID)
    pub id: String,

    pub date_created: NaiveDate,

    /// Requested volume in millilitres
    pub quantity_needed: i64,

    pub due_date: NaiveDate,

    #[sqlx(try_from = "String")]
    pub blood_type: BloodType,

    #[sqlx(try_from = "String")]
    pub rh: RhFactor,

    pub health_entity_id: String,
    pub health_entity_name: String,
}

impl BloodRequest {
    pub fn blood_group(&self) -> BloodGroup {
        BloodGroup::new(self.blood_type, self.rh)
    }
}
