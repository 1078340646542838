//! CSV Indicator Source - Implementation of IndicatorSource over a CSV file.
//!
//! Reads the per-element indicator file published with the HEA survey.
//! Rows are keyed by the `elements` column; every other column beyond the nine
//! indicators is ignored.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::impact::{Element, Indicator, IndicatorRecord, ReferenceTable};
use crate::ports::{IndicatorSource, IndicatorSourceError};

/// Header of the row key column.
pub const ELEMENT_COLUMN: &str = "elements";

/// One CSV row, with the two rights columns renamed to their "pressure" fields.
#[derive(Debug, Deserialize)]
struct IndicatorRow {
    #[serde(rename = "elements")]
    element: String,
    #[serde(rename = "Mass price (USD/kg)")]
    mass_price: f64,
    #[serde(rename = "Supply risk")]
    supply_risk: f64,
    #[serde(rename = "Normalized vulnerability to supply restriction")]
    normalized_vulnerability: f64,
    #[serde(rename = "Embodied energy (MJ/kg)")]
    embodied_energy: f64,
    #[serde(rename = "Rock to metal ratio (kg/kg)")]
    rock_to_metal_ratio: f64,
    #[serde(rename = "Water usage (l/kg)")]
    water_usage: f64,
    #[serde(rename = "Human health damage")]
    human_health_damage: f64,
    #[serde(rename = "Human rights violation")]
    human_rights_pressure: f64,
    #[serde(rename = "Labor rights disregard")]
    labor_rights_pressure: f64,
}

impl From<IndicatorRow> for IndicatorRecord {
    fn from(row: IndicatorRow) -> Self {
        IndicatorRecord {
            mass_price: row.mass_price,
            supply_risk: row.supply_risk,
            normalized_vulnerability: row.normalized_vulnerability,
            embodied_energy: row.embodied_energy,
            rock_to_metal_ratio: row.rock_to_metal_ratio,
            water_usage: row.water_usage,
            human_health_damage: row.human_health_damage,
            human_rights_pressure: row.human_rights_pressure,
            labor_rights_pressure: row.labor_rights_pressure,
        }
    }
}

/// Columns that must be present in the header row.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    std::iter::once(ELEMENT_COLUMN).chain(Indicator::ALL.into_iter().map(|i| i.source_column()))
}

/// Parses CSV reference data into a validated table.
///
/// Rows whose symbol is outside the supported element set are skipped.
pub fn parse_table<R: Read>(reader: R) -> Result<ReferenceTable, IndicatorSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| IndicatorSourceError::malformed(1, e.to_string()))?
        .clone();

    let missing: Vec<String> = required_columns()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .map(String::from)
        .collect();
    if !missing.is_empty() {
        return Err(IndicatorSourceError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<IndicatorRow>() {
        let row = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            IndicatorSourceError::malformed(line, e.to_string())
        })?;

        match row.element.parse::<Element>() {
            Ok(element) => rows.push((element, IndicatorRecord::from(row))),
            Err(unknown) => {
                tracing::warn!(symbol = %unknown.0, "Skipping reference row for unsupported element");
            }
        }
    }

    Ok(ReferenceTable::from_rows(rows)?)
}

/// Reference data stored in a local CSV file.
#[derive(Debug, Clone)]
pub struct CsvIndicatorSource {
    path: PathBuf,
}

impl CsvIndicatorSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl IndicatorSource for CsvIndicatorSource {
    async fn load_table(&self) -> Result<ReferenceTable, IndicatorSourceError> {
        tracing::debug!(path = %self.path.display(), "Loading reference indicator table");

        let bytes = fs::read(&self.path).await.map_err(|e| {
            IndicatorSourceError::unreadable(self.path.display().to_string(), e.to_string())
        })?;
        let table = parse_table(bytes.as_slice())?;

        tracing::debug!(path = %self.path.display(), "Reference indicator table loaded");
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
