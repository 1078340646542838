//! HTTP DTOs for impact endpoints.
//!
//! Result rows keep the column names of the results table they are
//! rendered into ("Impact Category", "Value", "Median value").

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::impact::{ImpactRecord, MedianEntry};

/// Category label of the error row.
pub const ERROR_CATEGORY: &str = "Erreur";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Composition entered in the form, one percentage per element in form order.
#[derive(Debug, Clone, Deserialize)]
pub struct CompositionRequest {
    pub percentages: Vec<f64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One computed impact row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactRowResponse {
    #[serde(rename = "Impact Category")]
    pub impact_category: String,
    /// Pre-formatted to the category precision.
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Median value")]
    pub median_value: f64,
}

impl From<ImpactRecord> for ImpactRowResponse {
    fn from(record: ImpactRecord) -> Self {
        Self {
            impact_category: record.category.label().to_string(),
            value: record.display,
            median_value: record.median,
        }
    }
}

/// Row displayed instead of results when the composition is rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRowResponse {
    #[serde(rename = "Impact Category")]
    pub impact_category: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Unit")]
    pub unit: String,
}

impl From<&ValidationError> for ErrorRowResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            impact_category: ERROR_CATEGORY.to_string(),
            value: err.user_message(),
            unit: String::new(),
        }
    }
}

/// One benchmark median.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedianRowResponse {
    #[serde(rename = "Impact Category")]
    pub impact_category: String,
    #[serde(rename = "Median value")]
    pub median_value: f64,
}

impl From<MedianEntry> for MedianRowResponse {
    fn from(entry: MedianEntry) -> Self {
        Self {
            impact_category: entry.category.label().to_string(),
            median_value: entry.median,
        }
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub elements: usize,
}

/// Standard error response for contract violations.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
