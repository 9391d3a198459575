#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the CafeChain public API.
//!
//! The backend speaks camelCase JSON and identifies documents with either
//! `id` or `_id`; both spellings are accepted on decode. Display projections in
//! the UI are built from these types so the wire contract stays in one place.

use serde::{Deserialize, Serialize};

/// Credentials posted to the authentication endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Ten-character mobile number used as the login identifier.
    pub phone: String,
    /// Plain-text password; transport security is the backend's concern.
    pub password: String,
}

/// Response envelope returned by the authentication endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// Human-readable reason, populated on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Bearer token issued on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Authenticated user profile, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorBody {
    /// Human-readable failure reason.
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

/// User profile as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Stable user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email, if known.
    #[serde(default)]
    pub email: Option<String>,
    /// Mobile number on file.
    #[serde(default)]
    pub phone: Option<String>,
    /// URL of the profile picture.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Cafe summary served by the listing/search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CafeDto {
    /// Stable cafe identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Cafe display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Feature tags such as `wifi` or `outdoor seating`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Image URLs, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the cafe is currently accepting orders.
    #[serde(default)]
    pub is_open: Option<bool>,
}

/// Leaderboard row; the backend returns these already ranked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    /// Stable cafe identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Cafe display name.
    pub name: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// Loyalty points accumulated in the current period.
    #[serde(default)]
    pub points: u64,
    /// Ranking movement, `up`, `down` or anything else for flat.
    #[serde(default)]
    pub trend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_mongo_ids_and_camel_case() {
        let json = r#"{
            "success": true,
            "token": "t0k",
            "user": {"_id": "u-1", "name": "Asha", "profileImage": "https://img/a.png"}
        }"#;
        let parsed: LoginResponse = serde_json::from_str(json).expect("decode");
        let user = parsed.user.expect("user");
        assert!(parsed.success);
        assert_eq!(parsed.token.as_deref(), Some("t0k"));
        assert_eq!(user.id, "u-1");
        assert_eq!(user.profile_image.as_deref(), Some("https://img/a.png"));
        assert_eq!(user.email, None);
    }

    #[test]
    fn rejection_carries_message_only() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#)
                .expect("decode");
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Invalid credentials"));
        assert!(parsed.user.is_none());
    }

    #[test]
    fn error_body_reads_error_alias() {
        let parsed: ErrorBody =
            serde_json::from_str(r#"{"error": "User not found"}"#).expect("decode");
        assert_eq!(parsed.message.as_deref(), Some("User not found"));
    }

    #[test]
    fn cafe_defaults_missing_collections() {
        let parsed: CafeDto =
            serde_json::from_str(r#"{"id": "c1", "name": "Brew Lab"}"#).expect("decode");
        assert!(parsed.features.is_empty());
        assert!(parsed.images.is_empty());
        assert_eq!(parsed.is_open, None);
    }

    #[test]
    fn leaderboard_trend_is_free_text() {
        let parsed: LeaderboardEntryDto = serde_json::from_str(
            r#"{"_id": "c9", "name": "Bean There", "points": 420, "trend": "sideways"}"#,
        )
        .expect("decode");
        assert_eq!(parsed.trend, "sideways");
        assert_eq!(parsed.points, 420);
    }

    #[test]
    fn request_serializes_plain_fields() {
        let body = serde_json::to_value(LoginRequest {
            phone: "9876543210".into(),
            password: "secret".into(),
        })
        .expect("encode");
        assert_eq!(body["phone"], "9876543210");
        assert_eq!(body["password"], "secret");
    }
}
