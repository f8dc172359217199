//! Session Store
//!
//! Access token plus its absolute expiry, kept in a persistent key/value store.

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "access-token";
/// Storage key of the token expiry (epoch seconds)
pub const EXPIRY_KEY: &str = "token-expir-time";

/// Minimal string key/value storage (browser `localStorage` in production)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Fails when the backing store rejects the write (quota, privacy mode)
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Session state on top of a [`KeyValueStore`]
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored token, without checking expiry
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Stored expiry in epoch seconds; unreadable values count as already expired
    pub fn expires_at(&self) -> Option<f64> {
        self.storage.get(EXPIRY_KEY).and_then(|raw| raw.trim().parse().ok())
    }

    /// True iff a token is stored and its expiry is after `now_secs`.
    ///
    /// An expired token is removed.
    pub fn is_logged_in(&self, now_secs: f64) -> bool {
        if self.token().is_none() {
            return false;
        }
        match self.expires_at() {
            Some(expiry) if expiry > now_secs => true,
            _ => {
                tracing::debug!(now = now_secs, "session token expired");
                self.storage.remove(TOKEN_KEY);
                false
            }
        }
    }

    /// Store a fresh token valid for `expires_in_secs` from `now_secs`.
    ///
    /// On a failed write no token is left behind.
    pub fn persist(
        &self,
        token: &str,
        expires_in_secs: f64,
        now_secs: f64,
    ) -> Result<(), String> {
        let expiry = now_secs + expires_in_secs;
        let written = self
            .storage
            .set(EXPIRY_KEY, &expiry.to_string())
            .and_then(|()| self.storage.set(TOKEN_KEY, token));
        if let Err(e) = &written {
            tracing::warn!(error = %e, "session not persisted");
            self.storage.remove(TOKEN_KEY);
            return written;
        }
        tracing::debug!(expiry, "session persisted");
        Ok(())
    }

    /// Forget the token (the caller reloads the page)
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for `localStorage`
    #[derive(Debug, Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    /// Rejects every write past the first `room` ones
    #[derive(Default)]
    struct FullStore {
        inner: MemoryStore,
        room: std::cell::Cell<usize>,
    }

    impl KeyValueStore for FullStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.room.get() == 0 {
                return Err("QuotaExceededError".to_string());
            }
            self.room.set(self.room.get() - 1);
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    fn store() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::default())
    }

    #[test]
    fn test_no_token_is_logged_out() {
        let session = store();
        assert!(!session.is_logged_in(100.0));
    }

    #[test]
    fn test_valid_token() {
        let session = store();
        session.persist("tok", 60.0, 1_000.0).unwrap();
        assert!(session.is_logged_in(1_059.0));
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.expires_at(), Some(1_060.0));
    }

    #[test]
    fn test_expired_token_is_removed() {
        let session = store();
        session.persist("tok", 60.0, 1_000.0).unwrap();
        assert!(!session.is_logged_in(1_060.0));
        assert!(session.token().is_none());
        // Stays logged out afterwards
        assert!(!session.is_logged_in(0.0));
    }

    #[test]
    fn test_token_without_expiry_is_removed() {
        let session = store();
        session.storage.set(TOKEN_KEY, "tok").unwrap();
        assert!(!session.is_logged_in(1.0));
        assert!(session.token().is_none());

        session.storage.set(TOKEN_KEY, "tok").unwrap();
        session.storage.set(EXPIRY_KEY, "garbage").unwrap();
        assert!(!session.is_logged_in(1.0));
        assert!(session.token().is_none());
    }

    #[test]
    fn test_clear() {
        let session = store();
        session.persist("tok", 3600.0, 0.0).unwrap();
        session.clear();
        assert!(!session.is_logged_in(1.0));
    }

    #[test]
    fn test_failed_write_leaves_no_session() {
        let session = SessionStore::new(FullStore::default());
        assert!(session.persist("tok", 60.0, 1_000.0).is_err());
        assert!(session.token().is_none());
        assert!(!session.is_logged_in(1_001.0));

        // Expiry fits, token does not: nothing usable is left behind
        let session = SessionStore::new(FullStore { room: 1.into(), ..Default::default() });
        assert!(session.persist("tok", 60.0, 1_000.0).is_err());
        assert!(session.token().is_none());
        assert!(!session.is_logged_in(1_001.0));
    }
}
