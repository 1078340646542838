//! Impact aggregator - turns a composition into alloy-level impact metrics.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;

use super::composition::CompositionVector;
use super::indicator::{Aggregation, Indicator};
use super::median::MedianTable;
use super::result::{ImpactRecord, ImpactResult};
use super::table::ReferenceTable;

/// Aggregates per-element indicators over an alloy composition.
///
/// Holds only immutable data, so one instance can serve any number of
/// concurrent requests. `compute` is deterministic: the same composition
/// always yields bit-identical records.
#[derive(Debug, Clone)]
pub struct ImpactAggregator {
    table: Arc<ReferenceTable>,
    medians: MedianTable,
}

impl ImpactAggregator {
    pub fn new(table: Arc<ReferenceTable>, medians: MedianTable) -> Self {
        Self { table, medians }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn medians(&self) -> &MedianTable {
        &self.medians
    }

    /// Computes the nine impact records of a composition.
    ///
    /// # Errors
    ///
    /// Returns `CompositionSumInvalid` when the percentages, rounded to two
    /// decimals, do not add up to exactly 100.
    pub fn compute(&self, composition: &CompositionVector) -> Result<ImpactResult, ValidationError> {
        if !composition.is_complete() {
            return Err(ValidationError::composition_sum_invalid(
                composition.total_percent(),
            ));
        }

        let records = Indicator::ALL
            .iter()
            .map(|&indicator| {
                let value = match indicator.aggregation() {
                    Aggregation::WeightedSum => self.weighted_sum(composition, indicator),
                    Aggregation::ComplementProduct => self.complement_product(composition, indicator),
                };
                ImpactRecord::new(indicator, value, self.medians.get(indicator))
            })
            .collect();

        Ok(ImpactResult::new(records))
    }

    /// `Σ fraction[e] * table[e][indicator]`
    fn weighted_sum(&self, composition: &CompositionVector, indicator: Indicator) -> f64 {
        composition
            .fractions()
            .map(|(element, fraction)| fraction * self.table.value(element, indicator))
            .sum()
    }

    /// `1 - Π (1 - fraction[e] * table[e][indicator])`
    ///
    /// Accumulated as `p ← p + q (1 - p)`, which is algebraically identical
    /// and keeps a single-element alloy exactly at that element's value.
    fn complement_product(&self, composition: &CompositionVector, indicator: Indicator) -> f64 {
        composition
            .fractions()
            .map(|(element, fraction)| fraction * self.table.value(element, indicator))
            .fold(0.0, |at_least_one, p| at_least_one + p * (1.0 - at_least_one))
    }
}
