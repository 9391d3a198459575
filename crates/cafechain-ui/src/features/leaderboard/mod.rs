//! Leaderboard feature wiring.
//!
//! # Design
//! - The widget is a pure projection of the store; ranking is the backend's job.
//! - Trend rendering is a closed lookup with a neutral default.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
