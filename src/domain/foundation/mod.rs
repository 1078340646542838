//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, rounding helpers, and error types
//! that form the vocabulary of the impact calculator domain.

mod errors;
mod percentage;
mod rounding;

pub use errors::{ErrorCode, ValidationError, SUM_MUST_BE_100_MESSAGE};
pub use percentage::WeightPercent;
pub use rounding::{format_fixed, round_half_even};
