use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::claims::decode_claims;
use super::store::{MemorySessionStore, SessionStore, StoredSession};
use crate::error::ConsoleResult;
use crate::models::{Role, TokenPair, User};

/// The signed-in session shared by the API client, router and console.
///
/// The in-memory copy is authoritative for reads; every change is written
/// through to the backing [`SessionStore`].
pub struct Session {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<StoredSession>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates an empty session over `store` without reading it.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Creates an empty session that is never persisted.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Creates a session initialised from whatever `store` holds.
    pub fn hydrate(store: Arc<dyn SessionStore>) -> ConsoleResult<Self> {
        let stored = store.load()?;
        if let Some(session) = &stored {
            debug!(user_id = session.user.id, role = ?session.user.role, "Session hydrated");
        }
        Ok(Self {
            store,
            current: RwLock::new(stored),
        })
    }

    /// Replaces the current session and persists it.
    pub fn establish(&self, session: StoredSession) -> ConsoleResult<()> {
        self.store.save(&session)?;
        info!(user_id = session.user.id, role = ?session.user.role, "Session established");
        *self.current.write() = Some(session);
        Ok(())
    }

    /// Decodes the access token's claims and establishes a session from them.
    pub fn establish_from_tokens(&self, tokens: TokenPair) -> ConsoleResult<User> {
        let user = decode_claims(&tokens.access_token)?;
        self.establish(StoredSession {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: user.clone(),
        })?;
        Ok(user)
    }

    /// Forgets the access token, refresh token and user.
    ///
    /// The in-memory copy is cleared even if the store fails, so a broken
    /// store can never keep a rejected token in use.
    pub fn teardown(&self) -> ConsoleResult<()> {
        let previous = self.current.write().take();
        if let Some(session) = previous {
            info!(user_id = session.user.id, "Session torn down");
        }
        self.store.clear().inspect_err(|e| {
            warn!(error = %e, "Failed to clear persisted session");
        })
    }

    /// Returns the bearer token, if signed in.
    pub fn access_token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.access_token.clone())
    }

    /// Returns the refresh token, if one was issued.
    pub fn refresh_token(&self) -> Option<String> {
        self.current
            .read()
            .as_ref()
            .and_then(|s| s.refresh_token.clone())
    }

    /// Returns the decoded user claims, if signed in.
    pub fn user(&self) -> Option<User> {
        self.current.read().as_ref().map(|s| s.user.clone())
    }

    /// Returns the signed-in user's role.
    pub fn role(&self) -> Option<Role> {
        self.current.read().as_ref().map(|s| s.user.role)
    }

    /// Returns true if a token is held and its claims have not expired.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now().timestamp())
    }

    /// Like [`Session::is_authenticated`] with an explicit clock (Unix seconds).
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.current
            .read()
            .as_ref()
            .is_some_and(|s| !s.access_token.is_empty() && !s.user.is_expired_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::claims::encode_unsigned_token;

    fn admin(exp: i64) -> User {
        User {
            id: 7,
            role: Role::Admin,
            sub: "admin@example.com".to_string(),
            iat: 0,
            exp,
        }
    }

    fn stored(exp: i64) -> StoredSession {
        StoredSession {
            access_token: "token".to_string(),
            refresh_token: Some("refresh".to_string()),
            user: admin(exp),
        }
    }

    #[test]
    fn test_hydrate_reads_store() {
        let store = Arc::new(MemorySessionStore::with_session(stored(i64::MAX)));
        let session = Session::hydrate(store).unwrap();
        assert_eq!(session.access_token().as_deref(), Some("token"));
        assert_eq!(session.role(), Some(Role::Admin));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_hydrate_empty_store() {
        let session = Session::hydrate(Arc::new(MemorySessionStore::new())).unwrap();
        assert!(session.access_token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_establish_writes_through() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());
        session.establish(stored(i64::MAX)).unwrap();
        assert_eq!(store.load().unwrap(), Some(stored(i64::MAX)));
    }

    #[test]
    fn test_establish_from_tokens_decodes_user() {
        let session = Session::in_memory();
        let tokens = TokenPair {
            message: None,
            access_token: encode_unsigned_token(&admin(i64::MAX)),
            refresh_token: Some("r".to_string()),
        };
        let user = session.establish_from_tokens(tokens).unwrap();
        assert_eq!(user, admin(i64::MAX));
        assert_eq!(session.refresh_token().as_deref(), Some("r"));
    }

    #[test]
    fn test_establish_from_bad_token_leaves_session_empty() {
        let session = Session::in_memory();
        let tokens = TokenPair {
            message: None,
            access_token: "garbage".to_string(),
            refresh_token: None,
        };
        assert!(session.establish_from_tokens(tokens).is_err());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_teardown_clears_memory_and_store() {
        let store = Arc::new(MemorySessionStore::with_session(stored(i64::MAX)));
        let session = Session::hydrate(store.clone()).unwrap();
        session.teardown().unwrap();
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert!(session.user().is_none());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_expired_claims_are_not_authenticated() {
        let session = Session::in_memory();
        session.establish(stored(1_000)).unwrap();
        assert!(session.is_authenticated_at(999));
        assert!(!session.is_authenticated_at(1_000));
    }
}
