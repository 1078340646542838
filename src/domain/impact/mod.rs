//! Impact module - societal impact aggregation for alloy compositions.
//!
//! # Components
//!
//! - `element` - The closed set of alloying elements
//! - `indicator` - Indicators / impact categories and per-element records
//! - `table` - Validated reference indicator table
//! - `composition` - Composition vectors and progress towards 100 %
//! - `median` - Benchmark medians per category
//! - `aggregator` - The impact computation itself

mod aggregator;
mod composition;
mod element;
mod indicator;
mod median;
mod result;
mod table;

pub use aggregator::ImpactAggregator;
pub use composition::{CompositionProgress, CompositionVector, ProgressStatus, TOTAL_DECIMALS};
pub use element::{Element, UnknownElement, ELEMENT_COUNT};
pub use indicator::{Aggregation, Indicator, IndicatorRecord, INDICATOR_COUNT};
pub use median::{MedianEntry, MedianTable};
pub use result::{ImpactRecord, ImpactResult};
pub use table::{ReferenceTable, ReferenceTableError};
