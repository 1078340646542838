//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `indicators` - Reference table sources (CSV file, in-memory)
//! - `http` - REST API over the impact calculator

pub mod http;
pub mod indicators;

pub use http::{app_router, ImpactAppState};
pub use indicators::{CsvIndicatorSource, StaticIndicatorSource};
