//! Customer landing page.
#[cfg(target_arch = "wasm32")]
pub mod view;

use crate::core::session::Session;

/// Greeting line for the home page.
#[must_use]
pub fn greeting(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!("Welcome back, {}!", session.display_name()),
        None => "Welcome to CafeChain!".to_string(),
    }
}
