//! Account endpoints and the session token.

mod account;
mod password;
mod profile;
mod session;

pub use account::{SignupOutcome, SignupRequest};
pub use session::{Token, TOKEN_HEADER};

/// Body-less acknowledgement: the server accepted the request and may have
/// said something about it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Acknowledged {
    pub message: Option<String>,
}

impl Acknowledged {
    pub(crate) fn from_message(message: Option<String>) -> Self {
        Self { message }
    }

    /// The server message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
