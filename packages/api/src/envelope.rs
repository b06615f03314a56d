//! # Response envelope
//!
//! Every endpoint of the catalog service answers with the same wrapper:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... }, "token": "..." }
//! ```
//!
//! All four fields are optional on the wire. [`Envelope`] decodes them leniently
//! and offers the few decisions the client makes on them.

use serde::Deserialize;

/// Message the login endpoint sends on success when it omits the `success` flag.
pub const LOGIN_SENTINEL: &str = "login successfully";

/// Messages the service uses to report duplicates, compared case-insensitively.
pub const CONFLICT_MESSAGES: [&str; 2] = ["user already exist", "plant already exist"];

/// The common `{ success, message, data, token }` response wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub data: Option<T>,
    pub token: Option<String>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            success: None,
            message: None,
            data: None,
            token: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Whether the server explicitly flagged this response as failed.
    pub fn is_flagged_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// Whether a login response grants a session.
    ///
    /// The structured `success` flag decides when present. Without it the only
    /// accepted shape is the exact [`LOGIN_SENTINEL`] message. Either way a
    /// non-blank token is required.
    pub fn grants_session(&self) -> bool {
        let accepted = match self.success {
            Some(flag) => flag,
            None => self.message.as_deref() == Some(LOGIN_SENTINEL),
        };
        accepted && self.session_token().is_some()
    }

    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Whether the message reports a duplicate record.
    pub fn is_conflict(&self) -> bool {
        self.message.as_deref().is_some_and(is_conflict_message)
    }
}

pub fn is_conflict_message(message: &str) -> bool {
    let message = message.trim();
    CONFLICT_MESSAGES
        .iter()
        .any(|known| message.eq_ignore_ascii_case(known))
}
