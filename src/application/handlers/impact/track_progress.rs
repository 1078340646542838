//! TrackProgressHandler - Query handler for the composition progress bar.

use crate::domain::foundation::{round_half_even, ValidationError};
use crate::domain::impact::{CompositionProgress, ELEMENT_COUNT, TOTAL_DECIMALS};

/// Query for the progress of a composition being typed in.
#[derive(Debug, Clone)]
pub struct TrackProgressQuery {
    /// Weight percentages in element order.
    pub percentages: Vec<f64>,
}

/// Handler reporting the rounded total and its status colour.
///
/// Individual values are not range-checked here: the bar must keep
/// reflecting whatever the form currently holds.
#[derive(Debug, Default)]
pub struct TrackProgressHandler;

impl TrackProgressHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: TrackProgressQuery) -> Result<CompositionProgress, ValidationError> {
        if query.percentages.len() != ELEMENT_COUNT {
            return Err(ValidationError::wrong_element_count(
                ELEMENT_COUNT,
                query.percentages.len(),
            ));
        }
        let sum: f64 = query.percentages.iter().sum();
        Ok(CompositionProgress::from_total(round_half_even(sum, TOTAL_DECIMALS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::impact::ProgressStatus;

    fn query_with(first: f64, second: f64) -> TrackProgressQuery {
        let mut percentages = vec![0.0; ELEMENT_COUNT];
        percentages[0] = first;
        percentages[1] = second;
        TrackProgressQuery { percentages }
    }

    #[test]
    fn complete_composition_is_success() {
        let progress = TrackProgressHandler::new().handle(query_with(70.0, 30.0)).unwrap();
        assert_eq!(progress.total, 100.0);
        assert_eq!(progress.status, ProgressStatus::Success);
    }

    #[test]
    fn partial_composition_is_warning() {
        let progress = TrackProgressHandler::new().handle(query_with(70.0, 29.99)).unwrap();
        assert_eq!(progress.total, 99.99);
        assert_eq!(progress.status, ProgressStatus::Warning);
    }

    #[test]
    fn excess_is_danger_even_with_out_of_range_values() {
        let progress = TrackProgressHandler::new().handle(query_with(120.0, 0.0)).unwrap();
        assert_eq!(progress.total, 120.0);
        assert_eq!(progress.status, ProgressStatus::Danger);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = TrackProgressHandler::new()
            .handle(TrackProgressQuery { percentages: vec![] })
            .unwrap_err();
        assert_eq!(err, ValidationError::wrong_element_count(ELEMENT_COUNT, 0));
    }
}
