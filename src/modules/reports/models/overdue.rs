use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification for requests past their due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverdueStatus {
    /// Past due and still under-delivered
    Overdue,
    /// Past due but fully delivered; excluded from the report
    FulfilledLate,
}

/// A request past its due date that remains under-delivered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverdueRequest {
    pub request_id: String,
    pub health_entity: String,
    /// Blood label, e.g. "AB-"
    pub blood: String,
    pub due_date: NaiveDate,
    pub needed: i64,
    /// Lifetime delivered volume, no window applied
    pub delivered: i64,
    /// Volume still missing, never negative
    pub shortage: i64,
    pub status: OverdueStatus,
}
