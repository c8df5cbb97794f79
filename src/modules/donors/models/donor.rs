use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered blood donor.
///
/// Donors are created and maintained elsewhere; the reporting service only
/// ever reads them as part of a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donor {
    /// Unique donor ID (UUID)
    pub id: String,

    /// National identity document number
    pub document: String,

    pub name: String,
    pub lastname: String,

    pub birth_date: NaiveDate,
}

impl Donor {
    /// Display name used in report rows
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }
}
