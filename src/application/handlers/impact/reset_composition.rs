//! ResetCompositionHandler - Query handler for the default form values.

use serde::Serialize;

use crate::domain::impact::{CompositionVector, Element};

/// The composition the form starts from and returns to on reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultComposition {
    pub elements: Vec<Element>,
    pub percentages: Vec<f64>,
}

/// Handler returning the all-zero default composition.
#[derive(Debug, Default)]
pub struct ResetCompositionHandler;

impl ResetCompositionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> DefaultComposition {
        DefaultComposition {
            elements: Element::ALL.to_vec(),
            percentages: CompositionVector::default().to_percentages(),
        }
    }
}
