//! Owner-facing open/closed toggle.
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
