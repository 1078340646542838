//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, rounding, errors)
//! - `impact` - Reference indicators, compositions and impact aggregation

pub mod foundation;
pub mod impact;
