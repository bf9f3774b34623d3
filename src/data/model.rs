use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – validation failures surfaced at the load boundary
// ---------------------------------------------------------------------------

/// Everything that can be wrong with the data itself (as opposed to I/O or
/// CSV syntax, which the loader reports separately).
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("booster label '{0}' has no version token")]
    MalformedBoosterLabel(String),

    #[error("outcome value {0} is outside the 0/1 domain")]
    OutcomeOutOfDomain(i64),

    #[error("dataset contains no launch records")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch result as recorded in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    /// Numeric value used for the scatter y-axis.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = DataError;

    fn try_from(raw: i64) -> Result<Self, DataError> {
        match raw {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(DataError::OutcomeOutOfDomain(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Launch sites
// ---------------------------------------------------------------------------

/// The fixed set of launch sites offered by the site selector.
pub const LAUNCH_SITES: [&str; 4] = [
    "CCAFS LC-40",
    "VAFB SLC-4E",
    "KSC LC-39A",
    "CCAFS SLC-40",
];

// ---------------------------------------------------------------------------
// Booster identifier derivation
// ---------------------------------------------------------------------------

/// Extract the booster identifier: the second whitespace-separated token of
/// the raw label (`"F9 v1.0  B0003"` → `"v1.0"`).
pub fn booster_version(label: &str) -> Result<String, DataError> {
    label
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| DataError::MalformedBoosterLabel(label.to_string()))
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Derived short designation, not the raw label.
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable base table plus values derived once at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records (rows).
    pub records: Vec<LaunchRecord>,
    /// Smallest payload mass in the dataset, kilograms.
    pub min_payload: f64,
    /// Largest payload mass in the dataset, kilograms.
    pub max_payload: f64,
    /// Sorted set of distinct booster versions, for stable colour order.
    pub booster_versions: BTreeSet<String>,
}

impl LaunchDataset {
    /// Build the dataset and its derived bounds. An empty record list is
    /// rejected: the payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let min_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);
        let booster_versions = records
            .iter()
            .map(|r| r.booster_version.clone())
            .collect();

        Ok(LaunchDataset {
            records,
            min_payload,
            max_payload,
            booster_versions,
        })
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty (never true for a constructed dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
