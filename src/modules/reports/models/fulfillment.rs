use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How far along a request is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    /// No bags delivered yet
    Pending,
    /// Some volume delivered, less than needed
    Partial,
    /// Delivered volume meets or exceeds the need
    Fulfilled,
}

impl FulfillmentStatus {
    pub fn classify(delivered: i64, needed: i64) -> Self {
        if delivered >= needed {
            FulfillmentStatus::Fulfilled
        } else if delivered > 0 {
            FulfillmentStatus::Partial
        } else {
            FulfillmentStatus::Pending
        }
    }
}

/// One request's delivery progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFulfillment {
    pub request_id: String,
    /// Blood label, e.g. "O+"
    pub blood: String,
    pub health_entity_id: String,
    pub created_at: NaiveDate,
    pub due_date: NaiveDate,
    /// Requested volume in millilitres
    pub needed: i64,
    /// Volume delivered within the reporting window
    pub delivered: i64,
    /// Percentage of `needed` covered, capped at 100
    pub fulfillment: u8,
    pub status: FulfillmentStatus,
}

/// Paginated fulfillment report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentReport {
    /// Matching requests before pagination
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub items: Vec<RequestFulfillment>,
}
