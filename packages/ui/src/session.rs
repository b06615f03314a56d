//! Session context and route-guard classification.
//!
//! [`Session`] is the only writer of the stored token. Views read it through
//! [`use_session`]; the dashboard shell turns [`Session::access`] into either
//! its children or a redirect to login.

use api::{ApiError, Token};
use dioxus::prelude::*;
use store::{KeyValueStore, SessionVault};

use crate::vault::{make_vault, PlatformStore};

/// What the route guard should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Storage not read yet; render nothing.
    Pending,
    Authenticated,
    /// Redirect to login.
    Anonymous,
}

/// Session state as held in the context signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<Token>,
    restored: bool,
}

impl SessionState {
    /// Read the stored token.
    pub fn restore<S: KeyValueStore>(vault: &SessionVault<S>) -> Self {
        Self {
            token: vault.token().and_then(|t| Token::new(t)),
            restored: true,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn access(&self) -> Access {
        match (self.restored, &self.token) {
            (false, _) => Access::Pending,
            (true, Some(_)) => Access::Authenticated,
            (true, None) => Access::Anonymous,
        }
    }

    pub fn sign_in<S: KeyValueStore>(&mut self, vault: &SessionVault<S>, token: Token) {
        vault.save_token(token.as_str());
        self.token = Some(token);
        self.restored = true;
    }

    /// Drop the token and wipe everything the dashboard stored.
    pub fn sign_out<S: KeyValueStore>(&mut self, vault: &SessionVault<S>) {
        vault.clear();
        self.token = None;
        self.restored = true;
    }

    /// The server refused the token: forget it, keep the remembered email.
    pub fn invalidate<S: KeyValueStore>(&mut self, vault: &SessionVault<S>) {
        vault.forget_token();
        self.token = None;
        self.restored = true;
    }

    /// Invalidate if `err` is an authorization failure. Returns whether it did.
    pub fn absorb<S: KeyValueStore>(&mut self, vault: &SessionVault<S>, err: &ApiError) -> bool {
        if err.is_auth_failure() {
            self.invalidate(vault);
            true
        } else {
            false
        }
    }
}

/// Handle to the session context. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<SessionState>,
    vault: Signal<SessionVault<PlatformStore>>,
}

impl Session {
    /// The current token. Subscribes the caller to session changes.
    pub fn token(&self) -> Option<Token> {
        self.state.read().token().cloned()
    }

    pub fn access(&self) -> Access {
        self.state.read().access()
    }

    pub fn sign_in(&mut self, token: Token) {
        tracing::info!("Session started");
        let vault = self.vault.peek();
        self.state.write().sign_in(&*vault, token);
    }

    /// Explicit logout.
    pub fn sign_out(&mut self) {
        tracing::info!("Signed out");
        let vault = self.vault.peek();
        self.state.write().sign_out(&*vault);
    }

    /// Invalidate the session if `err` is an authorization failure.
    /// The shell guard then redirects to login.
    pub fn absorb(&mut self, err: &ApiError) -> bool {
        let vault = self.vault.peek();
        let invalidated = self.state.write().absorb(&*vault, err);
        if invalidated {
            tracing::warn!("Session rejected by server, clearing it");
        }
        invalidated
    }

    /// Keep the address typed at login or registration. The auth forms prefill from it.
    pub fn remember_email(&self, email: &str) {
        self.vault.peek().remember_email(email);
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.vault.peek().remembered_email()
    }
}

/// Get the session context.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session.
/// The stored token is read once, right after mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let vault = use_signal(make_vault);
    let mut state = use_signal(SessionState::default);

    use_effect(move || {
        let restored = SessionState::restore(&*vault.peek());
        match restored.access() {
            Access::Authenticated => tracing::info!("Restored stored session"),
            _ => tracing::debug!("No stored session"),
        }
        state.set(restored);
    });

    use_context_provider(|| Session { state, vault });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_pending_until_restored() {
        assert_eq!(SessionState::default().access(), Access::Pending);

        let vault = SessionVault::new(MemoryStore::new());
        assert_eq!(SessionState::restore(&vault).access(), Access::Anonymous);

        vault.save_token("abc");
        let state = SessionState::restore(&vault);
        assert_eq!(state.access(), Access::Authenticated);
        assert_eq!(state.token().map(Token::as_str), Some("abc"));
    }

    #[test]
    fn test_blank_stored_token_is_anonymous() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save_token("   ");
        assert_eq!(SessionState::restore(&vault).access(), Access::Anonymous);
    }

    #[test]
    fn test_sign_in_persists_token() {
        let vault = SessionVault::new(MemoryStore::new());
        let mut state = SessionState::restore(&vault);
        state.sign_in(&vault, Token::new("fresh").unwrap());

        assert_eq!(state.access(), Access::Authenticated);
        assert_eq!(vault.token().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_sign_out_wipes_storage() {
        let store = MemoryStore::new();
        let vault = SessionVault::new(store.clone());
        vault.remember_email("a@gmail.com");
        let mut state = SessionState::default();
        state.sign_in(&vault, Token::new("abc").unwrap());

        state.sign_out(&vault);
        assert_eq!(state.access(), Access::Anonymous);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unauthorized_response_ends_session() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.remember_email("a@gmail.com");
        let mut state = SessionState::default();
        state.sign_in(&vault, Token::new("expired").unwrap());

        let err = ApiError::Unauthorized {
            status: 401,
            message: Some("jwt expired".to_string()),
        };
        assert!(state.absorb(&vault, &err));
        assert_eq!(state.access(), Access::Anonymous);
        assert!(vault.token().is_none());
        assert!(SessionState::restore(&vault).token().is_none());
        assert_eq!(vault.remembered_email().as_deref(), Some("a@gmail.com"));
    }

    #[test]
    fn test_other_errors_keep_session() {
        let vault = SessionVault::new(MemoryStore::new());
        let mut state = SessionState::default();
        state.sign_in(&vault, Token::new("abc").unwrap());

        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert!(!state.absorb(&vault, &err));
        assert_eq!(state.access(), Access::Authenticated);
        assert_eq!(vault.token().as_deref(), Some("abc"));
    }
}
