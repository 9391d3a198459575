//! Login form state and validation.
//!
//! # Design
//! - Validation runs before any network call and yields the user-facing message.
//! - The form moves `Idle -> Submitting -> Idle`; validation is synchronous so
//!   it never occupies a phase of its own.

use crate::core::auth::LoginResult;
use crate::core::error::AuthError;

/// Required length of a mobile number.
pub const PHONE_LENGTH: usize = 10;
/// Shown when either field is empty.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
/// Shown when the phone number is not exactly [`PHONE_LENGTH`] characters.
pub const MSG_INVALID_PHONE: &str = "Please enter a valid 10-digit mobile number.";
/// Shown for transport failures; the detail goes to the log.
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Check that a phone number has the required length.
///
/// # Errors
/// Returns the message to display when the length is wrong.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.chars().count() == PHONE_LENGTH {
        Ok(())
    } else {
        Err(MSG_INVALID_PHONE)
    }
}

/// Validate the login form fields in display order.
///
/// # Errors
/// Returns the message to display for the first failing rule.
pub fn validate_login(phone: &str, password: &str) -> Result<(), &'static str> {
    if phone.is_empty() || password.is_empty() {
        return Err(MSG_FILL_ALL_FIELDS);
    }
    validate_phone(phone)
}

/// Credentials accepted for submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// Mobile number.
    pub phone: String,
    /// Password.
    pub password: String,
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Editable.
    #[default]
    Idle,
    /// Waiting on the backend; submit is disabled.
    Submitting,
}

/// How a finished submission should be handled by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session established; leave the page.
    SignedIn,
    /// Stay on the page with the error shown.
    Retry,
}

/// Component-local login form state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginFormState {
    /// Phone input.
    pub phone: String,
    /// Password input.
    pub password: String,
    /// Whether the password renders as plain text.
    pub show_password: bool,
    /// Submit cycle phase.
    pub phase: LoginPhase,
    /// Inline error message.
    pub error: Option<String>,
}

impl LoginFormState {
    /// Whether a submission is in flight.
    #[must_use]
    pub fn submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Flip password visibility.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Start a submission.
    ///
    /// Returns the credentials to send, or `None` when validation failed (the
    /// error is set) or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting() {
            return None;
        }
        if let Err(message) = validate_login(&self.phone, &self.password) {
            self.error = Some(message.to_string());
            return None;
        }
        self.error = None;
        self.phase = LoginPhase::Submitting;
        Some(Credentials {
            phone: self.phone.clone(),
            password: self.password.clone(),
        })
    }

    /// Record the controller's answer and return to idle.
    pub fn finish_submit(&mut self, result: &Result<LoginResult, AuthError>) -> LoginOutcome {
        self.phase = LoginPhase::Idle;
        match result {
            Ok(LoginResult { success: true, .. }) => {
                self.error = None;
                LoginOutcome::SignedIn
            }
            Ok(LoginResult { error, .. }) => {
                self.error = Some(
                    error
                        .clone()
                        .unwrap_or_else(|| MSG_GENERIC_FAILURE.to_string()),
                );
                LoginOutcome::Retry
            }
            Err(_) => {
                self.error = Some(MSG_GENERIC_FAILURE.to_string());
                LoginOutcome::Retry
            }
        }
    }
}
