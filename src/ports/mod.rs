//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IndicatorSource` - Loads the reference indicator table at startup

mod indicator_source;

pub use indicator_source::{IndicatorSource, IndicatorSourceError};
