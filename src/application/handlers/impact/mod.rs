//! Impact handlers - compute, progress and reset for the composition form.

mod compute_impacts;
mod reset_composition;
mod track_progress;

pub use compute_impacts::{ComputeImpactsHandler, ComputeImpactsQuery, ComputeImpactsResult};
pub use reset_composition::{DefaultComposition, ResetCompositionHandler};
pub use track_progress::{TrackProgressHandler, TrackProgressQuery};
