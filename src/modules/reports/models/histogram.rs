use serde::{Deserialize, Serialize};

use crate::core::{BloodType, RhFactor};

/// Donation count and volume for one (ABO, Rh) group within a bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodGroupCount {
    pub blood_type: BloodType,
    pub rh: RhFactor,
    pub donations: i64,
    /// Total donated volume in millilitres
    pub units: i64,
}

impl BloodGroupCount {
    pub fn new(blood_type: BloodType, rh: RhFactor) -> Self {
        Self {
            blood_type,
            rh,
            donations: 0,
            units: 0,
        }
    }
}

/// One calendar bucket (ISO day "YYYY-MM-DD" or month "YYYY-MM") with its
/// per-group rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub period: String,
    pub items: Vec<BloodGroupCount>,
}

/// Histogram output: a flat list when no bucketing was requested, otherwise
/// period buckets in chronological order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DonationHistogram {
    Flat(Vec<BloodGroupCount>),
    Periods(Vec<HistogramBucket>),
}
