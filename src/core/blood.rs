use serde::{Deserialize, Serialize};
use std::fmt;

/// ABO blood groups
///
/// Variant order matters: reports sort ascending by the type symbol
/// (lexicographic, so A < AB < B < O), and the derived `Ord` must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BloodType {
    A,
    #[serde(rename = "AB")]
    Ab,
    B,
    O,
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodType::A => write!(f, "A"),
            BloodType::Ab => write!(f, "AB"),
            BloodType::B => write!(f, "B"),
            BloodType::O => write!(f, "O"),
        }
    }
}

impl std::str::FromStr for BloodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(BloodType::A),
            "AB" => Ok(BloodType::Ab),
            "B" => Ok(BloodType::B),
            "O" => Ok(BloodType::O),
            _ => Err(format!("Invalid blood type: {}", s)),
        }
    }
}

impl TryFrom<String> for BloodType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Rhesus factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RhFactor {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
}

impl fmt::Display for RhFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhFactor::Positive => write!(f, "+"),
            RhFactor::Negative => write!(f, "-"),
        }
    }
}

impl std::str::FromStr for RhFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Query strings may spell the sign out, and "+" often arrives as a space
        match s.trim().to_lowercase().as_str() {
            "+" | "" | "pos" | "positive" => Ok(RhFactor::Positive),
            "-" | "neg" | "negative" => Ok(RhFactor::Negative),
            _ => Err(format!("Invalid Rh factor: {}", s)),
        }
    }
}

impl TryFrom<String> for RhFactor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Composite (ABO, Rh) grouping key used by every aggregation.
///
/// A struct key instead of a concatenated string, so grouping can never be
/// confused by the label format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BloodGroup {
    pub blood_type: BloodType,
    pub rh: RhFactor,
}

impl BloodGroup {
    pub fn new(blood_type: BloodType, rh: RhFactor) -> Self {
        Self { blood_type, rh }
    }

    /// Human-readable label, e.g. "O+" or "AB-"
    pub fn label(&self) -> String {
        format!("{}{}", self.blood_type, self.rh)
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.blood_type, self.rh)
    }
}
