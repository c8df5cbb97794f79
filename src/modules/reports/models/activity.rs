use serde::{Deserialize, Serialize};

use crate::modules::donors::models::Donor;

/// One donor's activity within the reporting window.
///
/// Every known donor gets a row, including those with no donations in the
/// period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorActivity {
    pub donor_id: String,
    pub name: String,
    pub document: String,
    pub donations: i64,
    /// Total donated volume in millilitres
    pub units: i64,
}

impl DonorActivity {
    /// Zero-activity row for a known donor
    pub fn for_donor(donor: &Donor) -> Self {
        Self {
            donor_id: donor.id.clone(),
            name: donor.full_name(),
            document: donor.document.clone(),
            donations: 0,
            units: 0,
        }
    }
}
