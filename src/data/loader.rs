use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{booster_version, LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch-records table from a CSV file.
///
/// Required columns (matched by header name):
/// * `Launch Site` – string
/// * `Payload Mass (kg)` – number
/// * `class` – integer 0/1 launch outcome
/// * `Booster Version` – raw label, e.g. `"F9 v1.0  B0003"`
///
/// Any other columns are ignored. There is no recovery path: the caller is
/// expected to treat an error as fatal.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_reader(file).with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV row, deserialized by header name.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
}

/// Parse launch records from any CSV source. Split out from [`load_file`]
/// so tests can feed in-memory fixtures.
pub fn load_reader<R: Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let booster = booster_version(&raw.booster_version)
            .with_context(|| format!("CSV row {row_no}"))?;
        let outcome = Outcome::try_from(raw.class)
            .with_context(|| format!("CSV row {row_no}"))?;

        records.push(LaunchRecord {
            site: raw.launch_site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_version: booster,
        });
    }

    Ok(LaunchDataset::from_records(records)?)
}
