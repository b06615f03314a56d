//! # User profile model
//!
//! [`UserProfile`] is the read-only view of an account returned by
//! `GET /auth/profile` (the signed-in user) and `GET /auth/users` (every
//! account, admins only). The client never writes it back and never caches it
//! across views.
//!
//! Wire names follow the service: `_id`, `userName`, `isVerified`, `createdAt`
//! (RFC 3339). A missing or unrecognised `role` reads as [`Role::User`], which
//! hides admin-only UI rather than revealing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// User information as served by the profile endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Get display name, falling back to email if the username is blank.
    pub fn display_name(&self) -> &str {
        if self.user_name.trim().is_empty() {
            &self.email
        } else {
            &self.user_name
        }
    }

    /// Account creation date as `YYYY-MM-DD`, or an empty string when unknown.
    pub fn created_on(&self) -> String {
        self.created_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
