//! Authenticated user session and its display helpers.
//!
//! # Design
//! - A session is plain data: the store owns it, persistence mirrors it.
//! - Profile fallbacks are computed here so both navbars agree.

use cafechain_api_models::UserDto;
use serde::{Deserialize, Serialize};

/// Placeholder shown when neither an image, a name nor an email is known.
pub const AVATAR_PLACEHOLDER: char = 'U';

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend user identifier.
    pub user_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Profile picture URL.
    pub profile_image: Option<String>,
    /// Bearer token for authenticated calls.
    #[serde(default)]
    pub token: Option<String>,
    /// Whether the backend accepted the credentials for this session.
    pub authenticated: bool,
}

impl Session {
    /// Build an authenticated session from the login response payload.
    #[must_use]
    pub fn from_user(user: UserDto, token: Option<String>) -> Self {
        Self {
            user_id: user.id,
            name: non_blank(user.name),
            email: non_blank(user.email),
            profile_image: non_blank(user.profile_image),
            token,
            authenticated: true,
        }
    }

    /// Uppercase initial used when no profile image is available.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        avatar_initial(self.name.as_deref(), self.email.as_deref())
    }

    /// Best label for greetings and menus.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Guest")
    }
}

/// Profile affordance rendered in the navbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    /// Remote profile picture.
    Image(String),
    /// Single-letter fallback.
    Initial(char),
}

/// Pick the profile affordance for an optional session.
#[must_use]
pub fn avatar_for(session: Option<&Session>) -> Avatar {
    match session {
        Some(Session {
            profile_image: Some(url),
            ..
        }) if !url.trim().is_empty() => Avatar::Image(url.clone()),
        Some(session) => Avatar::Initial(session.avatar_initial()),
        None => Avatar::Initial(AVATAR_PLACEHOLDER),
    }
}

/// First letter of the name, else of the email, else [`AVATAR_PLACEHOLDER`].
#[must_use]
pub fn avatar_initial(name: Option<&str>, email: Option<&str>) -> char {
    [name, email]
        .into_iter()
        .flatten()
        .find_map(|value| value.trim().chars().next())
        .and_then(|first| first.to_uppercase().next())
        .unwrap_or(AVATAR_PLACEHOLDER)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
