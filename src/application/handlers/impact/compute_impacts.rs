//! ComputeImpactsHandler - Query handler for the impact table of a composition.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::impact::{CompositionVector, ImpactAggregator, ImpactResult};

/// Query to compute the impacts of one alloy.
#[derive(Debug, Clone)]
pub struct ComputeImpactsQuery {
    /// Weight percentages in element order.
    pub percentages: Vec<f64>,
}

/// Result of a successful computation.
pub type ComputeImpactsResult = ImpactResult;

/// Handler computing the nine impact records.
///
/// Validation failures are returned as values; nothing in this handler
/// panics on user input.
pub struct ComputeImpactsHandler {
    aggregator: Arc<ImpactAggregator>,
}

impl ComputeImpactsHandler {
    pub fn new(aggregator: Arc<ImpactAggregator>) -> Self {
        Self { aggregator }
    }

    pub fn handle(&self, query: ComputeImpactsQuery) -> Result<ComputeImpactsResult, ValidationError> {
        let composition = CompositionVector::from_percentages(&query.percentages)?;

        match self.aggregator.compute(&composition) {
            Ok(result) => {
                tracing::debug!(total = composition.total_percent(), "Computed alloy impacts");
                Ok(result)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Rejected alloy composition");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::impact::{
        Element, Indicator, IndicatorRecord, MedianTable, ReferenceTable, ELEMENT_COUNT,
    };

    // ─────────────────────────────────────────────────────────────────────
    // Test Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn handler() -> ComputeImpactsHandler {
        let table = ReferenceTable::from_rows(Element::ALL.iter().map(|&e| {
            let seed = e.index() as f64;
            (
                e,
                IndicatorRecord::from_values([
                    seed, 0.2, 0.1, seed, seed, seed, seed, seed, seed,
                ]),
            )
        }))
        .unwrap();
        ComputeImpactsHandler::new(Arc::new(ImpactAggregator::new(
            Arc::new(table),
            MedianTable::default(),
        )))
    }

    fn percentages(pairs: &[(Element, f64)]) -> Vec<f64> {
        let mut values = vec![0.0; ELEMENT_COUNT];
        for (element, value) in pairs {
            values[element.index()] = *value;
        }
        values
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn returns_impacts_for_complete_composition() {
        let query = ComputeImpactsQuery {
            percentages: percentages(&[(Element::Fe, 50.0), (Element::Ni, 50.0)]),
        };

        let result = handler().handle(query).unwrap();

        assert_eq!(result.records().len(), 9);
        // Fe seed 5, Ni seed 11
        assert_eq!(result.value(Indicator::MassPrice), 8.0);
        assert_eq!(result.display(Indicator::MassPrice), "8.0");
    }

    #[test]
    fn rejects_incomplete_composition() {
        let query = ComputeImpactsQuery {
            percentages: percentages(&[(Element::Fe, 99.99)]),
        };

        let err = handler().handle(query).unwrap_err();
        assert!(matches!(err, ValidationError::CompositionSumInvalid { .. }));
    }

    #[test]
    fn rejects_out_of_range_percentage() {
        let query = ComputeImpactsQuery {
            percentages: percentages(&[(Element::Fe, 150.0), (Element::C, -50.0)]),
        };

        let err = handler().handle(query).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("C", 0.0, 100.0, -50.0));
    }

    #[test]
    fn rejects_wrong_vector_length_as_contract_violation() {
        let query = ComputeImpactsQuery {
            percentages: vec![100.0],
        };

        let err = handler().handle(query).unwrap_err();
        assert!(err.is_contract_violation());
    }
}
