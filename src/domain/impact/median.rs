//! Median benchmark values per impact category.

use serde::Serialize;

use super::indicator::{Indicator, INDICATOR_COUNT};

/// Benchmark medians computed over 340 published high-entropy alloys.
const PUBLISHED_HEA_MEDIANS: [f64; INDICATOR_COUNT] = [
    19.3,  // Mass price (USD/kg)
    0.316, // Supply risk
    0.115, // Normalized vulnerability to supply restriction
    333.0, // Embodied energy (MJ/kg)
    603.0, // Rock to metal ratio (kg/kg)
    355.0, // Water usage (l/kg)
    23.0,  // Human health damage
    31.0,  // Human rights pressure
    41.0,  // Labor rights pressure
];

/// Median value of each impact category, used as the comparison column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianTable {
    values: [f64; INDICATOR_COUNT],
}

/// One row of the median table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MedianEntry {
    pub category: Indicator,
    pub median: f64,
}

impl MedianTable {
    /// Creates a table from values listed in indicator order.
    pub fn new(values: [f64; INDICATOR_COUNT]) -> Self {
        Self { values }
    }

    /// Medians of the published high-entropy alloy survey.
    pub fn published_hea() -> Self {
        Self::new(PUBLISHED_HEA_MEDIANS)
    }

    /// Median for one category.
    pub fn get(&self, category: Indicator) -> f64 {
        self.values[category.index()]
    }

    /// All entries in category order.
    pub fn entries(&self) -> Vec<MedianEntry> {
        Indicator::ALL
            .iter()
            .map(|&category| MedianEntry {
                category,
                median: self.get(category),
            })
            .collect()
    }
}

impl Default for MedianTable {
    fn default() -> Self {
        Self::published_hea()
    }
}
