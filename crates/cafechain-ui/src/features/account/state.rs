//! Password recovery form.

use crate::features::login::state::{MSG_FILL_ALL_FIELDS, validate_phone};

/// Confirmation shown once a valid number was submitted.
pub const MSG_RESET_REQUESTED: &str =
    "If this number is registered, you will receive reset instructions shortly.";

/// Component-local recovery form state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ForgotPasswordState {
    /// Phone input.
    pub phone: String,
    /// Inline validation error.
    pub error: Option<String>,
    /// Set after a valid submission.
    pub submitted: bool,
}

impl ForgotPasswordState {
    /// Validate and mark the request as sent. Returns whether it was accepted.
    pub fn submit(&mut self) -> bool {
        let check = if self.phone.is_empty() {
            Err(MSG_FILL_ALL_FIELDS)
        } else {
            validate_phone(&self.phone)
        };
        match check {
            Ok(()) => {
                self.error = None;
                self.submitted = true;
            }
            Err(message) => {
                self.error = Some(message.to_string());
                self.submitted = false;
            }
        }
        self.submitted
    }
}
