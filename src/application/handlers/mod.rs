//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod impact;

pub use impact::{
    ComputeImpactsHandler, ComputeImpactsQuery, ComputeImpactsResult, DefaultComposition,
    ResetCompositionHandler, TrackProgressHandler, TrackProgressQuery,
};
