//! Application layer - Queries, Handlers and startup wiring.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every impact operation is a read-only query over immutable reference data.

pub mod handlers;
mod startup;

pub use handlers::{
    ComputeImpactsHandler, ComputeImpactsQuery, ComputeImpactsResult, DefaultComposition,
    ResetCompositionHandler, TrackProgressHandler, TrackProgressQuery,
};
pub use startup::build_aggregator;
