//! Composition vector - weight percentages of every element in an alloy.

use serde::Serialize;

use crate::domain::foundation::{round_half_even, ValidationError, WeightPercent};

use super::element::{Element, ELEMENT_COUNT};

/// Decimals kept when totalling percentages.
pub const TOTAL_DECIMALS: usize = 2;

/// Weight percentage of each element, in [`Element::ALL`] order.
///
/// Every element always has an entry; a composition with fewer or more
/// values than elements cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompositionVector {
    percentages: [WeightPercent; ELEMENT_COUNT],
}

impl CompositionVector {
    /// Builds a composition from percentages listed in element order.
    ///
    /// # Errors
    ///
    /// - `WrongElementCount` if `values` does not hold one entry per element
    /// - `OutOfRange` if a value is not a finite number in [0, 100]
    pub fn from_percentages(values: &[f64]) -> Result<Self, ValidationError> {
        if values.len() != ELEMENT_COUNT {
            return Err(ValidationError::wrong_element_count(ELEMENT_COUNT, values.len()));
        }

        let mut percentages = [WeightPercent::ZERO; ELEMENT_COUNT];
        for ((slot, element), value) in percentages.iter_mut().zip(Element::ALL).zip(values) {
            *slot = WeightPercent::try_new(element.symbol(), *value)?;
        }
        Ok(Self { percentages })
    }

    /// Builds a composition from `(element, percent)` pairs; unlisted elements are 0 %.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (Element, f64)>,
    {
        let mut composition = Self::default();
        for (element, value) in pairs {
            composition.percentages[element.index()] =
                WeightPercent::try_new(element.symbol(), value)?;
        }
        Ok(composition)
    }

    /// Returns the percentage of one element.
    pub fn percent(&self, element: Element) -> WeightPercent {
        self.percentages[element.index()]
    }

    /// Returns the mass fraction of one element.
    pub fn fraction(&self, element: Element) -> f64 {
        self.percent(element).as_fraction()
    }

    /// Iterates over `(element, fraction)` in element order.
    pub fn fractions(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL
            .iter()
            .copied()
            .zip(self.percentages.iter().map(WeightPercent::as_fraction))
    }

    /// Sum of all percentages rounded to two decimals.
    pub fn total_percent(&self) -> f64 {
        let sum: f64 = self.percentages.iter().map(WeightPercent::value).sum();
        round_half_even(sum, TOTAL_DECIMALS)
    }

    /// Whether the rounded total is exactly 100 %.
    pub fn is_complete(&self) -> bool {
        self.total_percent() == 100.0
    }

    /// Returns the percentages as plain numbers in element order.
    pub fn to_percentages(&self) -> Vec<f64> {
        self.percentages.iter().map(WeightPercent::value).collect()
    }
}

/// Colour of the composition progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    /// Total is exactly 100 %.
    Success,
    /// Total is below 100 %.
    Warning,
    /// Total exceeds 100 %.
    Danger,
}

/// How far a composition is from a complete alloy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositionProgress {
    pub total: f64,
    pub status: ProgressStatus,
}

impl CompositionProgress {
    /// Classifies a rounded percentage total.
    pub fn from_total(total: f64) -> Self {
        let status = if total == 100.0 {
            ProgressStatus::Success
        } else if total < 100.0 {
            ProgressStatus::Warning
        } else {
            ProgressStatus::Danger
        };
        Self { total, status }
    }

    /// Progress of a composition.
    pub fn of(composition: &CompositionVector) -> Self {
        Self::from_total(composition.total_percent())
    }
}
