//! Impact result - the nine aggregated metrics of one composition.

use crate::domain::foundation::format_fixed;

use super::indicator::Indicator;

/// One row of the impact table.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactRecord {
    pub category: Indicator,
    /// Unrounded aggregate.
    pub value: f64,
    /// Aggregate formatted to the category precision.
    pub display: String,
    pub median: f64,
}

impl ImpactRecord {
    /// Creates a record, formatting `value` to the category precision.
    pub fn new(category: Indicator, value: f64, median: f64) -> Self {
        Self {
            category,
            value,
            display: format_fixed(value, category.precision()),
            median,
        }
    }
}

/// The nine impact records of a composition, in [`Indicator::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactResult {
    records: Vec<ImpactRecord>,
}

impl ImpactResult {
    pub(crate) fn new(records: Vec<ImpactRecord>) -> Self {
        debug_assert_eq!(records.len(), Indicator::ALL.len());
        Self { records }
    }

    /// Records in category order.
    pub fn records(&self) -> &[ImpactRecord] {
        &self.records
    }

    /// Record of one category.
    pub fn get(&self, category: Indicator) -> &ImpactRecord {
        &self.records[category.index()]
    }

    /// Unrounded value of one category.
    pub fn value(&self, category: Indicator) -> f64 {
        self.get(category).value
    }

    /// Formatted value of one category.
    pub fn display(&self, category: Indicator) -> &str {
        &self.get(category).display
    }

    pub fn into_records(self) -> Vec<ImpactRecord> {
        self.records
    }
}
