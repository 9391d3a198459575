//! Cafe listing feature wiring.
//!
//! # Design
//! - Filtering is delegated to the backend via the `search` query.
//! - Restrict API calls to this feature layer to honor UI boundaries.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
