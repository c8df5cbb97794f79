use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{BloodGroup, BloodType, RhFactor};

/// Optional inclusive `[from, to]` date window.
///
/// Every report uses this single primitive to decide whether a record falls
/// inside the reporting period. Absent bounds are non-restrictive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TimeRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Window with no bounds; matches every date
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// True when `date` falls inside the window (bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Optional ABO/Rh filters for the inventory report; an absent field
/// matches everything
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodFilter {
    pub blood_type: Option<BloodType>,
    pub rh: Option<RhFactor>,
}

impl BloodFilter {
    pub fn matches(&self, group: &BloodGroup) -> bool {
        if let Some(blood_type) = self.blood_type {
            if group.blood_type != blood_type {
                return false;
            }
        }
        if let Some(rh) = self.rh {
            if group.rh != rh {
                return false;
            }
        }
        true
    }
}

/// Page window for the fulfillment report
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Pagination {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }
}

/// Bucketing mode for the donation histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    None,
    Day,
    Month,
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(GroupBy::None),
            "day" => Ok(GroupBy::Day),
            "month" => Ok(GroupBy::Month),
            _ => Err(format!("Invalid group_by: {} (expected none|day|month)", s)),
        }
    }
}
