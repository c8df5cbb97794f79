use serde::{Deserialize, Serialize};

use crate::core::{BloodType, RhFactor};

/// Usable stock for one (ABO, Rh) group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryGroup {
    pub blood_type: BloodType,
    pub rh: RhFactor,
    /// Total volume in millilitres
    pub units: i64,
    /// Number of bags contributing to the total
    pub bags: i64,
}

impl InventoryGroup {
    pub fn new(blood_type: BloodType, rh: RhFactor) -> Self {
        Self {
            blood_type,
            rh,
            units: 0,
            bags: 0,
        }
    }
}
