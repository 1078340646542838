//! Startup - builds the shared aggregator from a reference data source.

use std::sync::Arc;

use crate::domain::impact::{ImpactAggregator, MedianTable};
use crate::ports::{IndicatorSource, IndicatorSourceError};

/// Loads the reference table once and wraps it with the published medians.
///
/// # Errors
///
/// Any source error is returned unchanged; the caller must not serve
/// requests without a table.
pub async fn build_aggregator(
    source: &dyn IndicatorSource,
) -> Result<Arc<ImpactAggregator>, IndicatorSourceError> {
    tracing::info!(source = %source.describe(), "Loading reference data");

    match source.load_table().await {
        Ok(table) => {
            tracing::info!(source = %source.describe(), "Reference data loaded");
            Ok(Arc::new(ImpactAggregator::new(
                Arc::new(table),
                MedianTable::published_hea(),
            )))
        }
        Err(err) => {
            tracing::error!(source = %source.describe(), error = %err, "Reference data failed to load");
            Err(err)
        }
    }
}
