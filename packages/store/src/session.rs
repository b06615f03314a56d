//! Typed access to the persisted session entries.

use crate::kv::KeyValueStore;

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "token";

/// Key for the email captured at registration, used by the verification screens.
pub const EMAIL_KEY: &str = "email";

/// Session persistence over any [`KeyValueStore`].
///
/// This is the only code that knows the storage key names. The UI layer owns a
/// single vault instance and is the only writer.
#[derive(Clone, Debug)]
pub struct SessionVault<S> {
    store: S,
}

impl<S: KeyValueStore> SessionVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn save_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.store.get(EMAIL_KEY).filter(|e| !e.is_empty())
    }

    pub fn remember_email(&self, email: &str) {
        self.store.set(EMAIL_KEY, email);
    }

    /// Drop the token but keep the remembered email.
    pub fn forget_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    /// Wipe everything the dashboard stored.
    pub fn clear(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "   ");
        let vault = SessionVault::new(store);
        assert!(vault.token().is_none());
    }

    #[test]
    fn test_forget_token_keeps_email() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save_token("abc");
        vault.remember_email("gardener@gmail.com");

        vault.forget_token();
        assert!(vault.token().is_none());
        assert_eq!(vault.remembered_email().as_deref(), Some("gardener@gmail.com"));
    }

    #[test]
    fn test_clear_drops_email_too() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save_token("abc");
        vault.remember_email("gardener@gmail.com");
        assert_eq!(vault.remembered_email().as_deref(), Some("gardener@gmail.com"));

        vault.clear();
        assert!(vault.token().is_none());
        assert!(vault.remembered_email().is_none());
    }
}
