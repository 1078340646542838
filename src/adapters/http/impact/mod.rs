//! HTTP adapter for impact endpoints.
//!
//! Exposes the impact calculator via REST API:
//! - `POST /api/impacts` - Compute the nine impact rows of a composition
//! - `POST /api/progress` - Running total of the composition form
//! - `GET /api/composition/default` - Default (reset) form values
//! - `GET /api/medians` - Benchmark medians
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{ImpactApiError, ImpactAppState};
pub use routes::{impact_router, impact_routes};
