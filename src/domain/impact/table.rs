//! Reference indicator table - per-element indicator values.
//!
//! Built once at startup and shared read-only by every computation. A table
//! always holds exactly one validated record per [`Element`]; any gap in the
//! source data is rejected at construction time.

use thiserror::Error;

use super::element::{Element, ELEMENT_COUNT};
use super::indicator::{Indicator, IndicatorRecord};

/// Errors detected while assembling a reference table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceTableError {
    #[error("Reference data has no row for elements: {}", format_elements(.0))]
    MissingElements(Vec<Element>),

    #[error("Reference data has more than one row for element {0}")]
    DuplicateElement(Element),

    #[error("Invalid value {value} for '{indicator}' of element {element}: {reason}")]
    InvalidValue {
        element: Element,
        indicator: Indicator,
        value: f64,
        reason: &'static str,
    },
}

fn format_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(Element::symbol)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Immutable mapping from every element to its indicator record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    records: [IndicatorRecord; ELEMENT_COUNT],
}

impl ReferenceTable {
    /// Builds a table from `(element, record)` rows.
    ///
    /// # Errors
    ///
    /// - `DuplicateElement` if an element appears twice
    /// - `InvalidValue` if a value is not finite or a supply risk lies outside [0, 1]
    /// - `MissingElements` if any element has no row
    pub fn from_rows<I>(rows: I) -> Result<Self, ReferenceTableError>
    where
        I: IntoIterator<Item = (Element, IndicatorRecord)>,
    {
        let mut slots: [Option<IndicatorRecord>; ELEMENT_COUNT] = [None; ELEMENT_COUNT];

        for (element, record) in rows {
            validate_record(element, &record)?;
            let slot = &mut slots[element.index()];
            if slot.is_some() {
                return Err(ReferenceTableError::DuplicateElement(element));
            }
            *slot = Some(record);
        }

        let missing: Vec<Element> = Element::ALL
            .iter()
            .copied()
            .filter(|e| slots[e.index()].is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ReferenceTableError::MissingElements(missing));
        }

        let mut records = [IndicatorRecord::default(); ELEMENT_COUNT];
        for (record, slot) in records.iter_mut().zip(slots) {
            if let Some(found) = slot {
                *record = found;
            }
        }
        Ok(Self { records })
    }

    /// Returns the record for an element.
    pub fn record(&self, element: Element) -> &IndicatorRecord {
        &self.records[element.index()]
    }

    /// Returns one indicator value for an element.
    pub fn value(&self, element: Element, indicator: Indicator) -> f64 {
        self.record(element).get(indicator)
    }

    /// Iterates over `(element, record)` in element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, &IndicatorRecord)> {
        Element::ALL.iter().copied().zip(self.records.iter())
    }
}

fn validate_record(element: Element, record: &IndicatorRecord) -> Result<(), ReferenceTableError> {
    for indicator in Indicator::ALL {
        let value = record.get(indicator);
        if !value.is_finite() {
            return Err(ReferenceTableError::InvalidValue {
                element,
                indicator,
                value,
                reason: "value must be a finite number",
            });
        }
    }
    if !(0.0..=1.0).contains(&record.supply_risk) {
        return Err(ReferenceTableError::InvalidValue {
            element,
            indicator: Indicator::SupplyRisk,
            value: record.supply_risk,
            reason: "supply risk must lie between 0 and 1",
        });
    }
    Ok(())
}
