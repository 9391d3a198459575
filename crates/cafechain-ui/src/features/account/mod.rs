//! Profile, rewards and password recovery pages.
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
