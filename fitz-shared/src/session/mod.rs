//! # Session
//!
//! The authenticated session (bearer token plus cached user) and its
//! persistence. A [`SessionStore`] owns a [`SessionStorage`] backend and keeps
//! the two keys in step: either both are written or the session is treated
//! as logged out.
//!
//! Restoring is optimistic. A persisted token is trusted until a request
//! rejects it; [`SessionStore::revalidate`] is the explicit check.

mod storage;

pub use storage::{MemoryStorage, SessionStorage, StorageError};

use tracing::{debug, info, warn};

use crate::{
    api::{ClientError, FitzClient},
    forms::RegisterForm,
    models::{AuthResponse, LoginRequest, User},
};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the cached user as JSON.
pub const USER_KEY: &str = "user";

/// An authenticated session. A user never exists without its token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Session state over a storage backend.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rebuild the session from storage without touching the network.
    ///
    /// A token without a readable user is treated as logged out.
    pub fn restore(storage: S) -> Self {
        let session = match (storage.get(TOKEN_KEY), storage.get(USER_KEY)) {
            (Some(token), Some(user)) if !token.is_empty() => {
                match serde_json::from_str::<User>(&user) {
                    Ok(user) => Some(Session { token, user }),
                    Err(error) => {
                        warn!(%error, "ignoring unreadable persisted user");
                        None
                    }
                }
            }
            (Some(_), None) => {
                warn!("persisted token has no user, treating session as logged out");
                None
            }
            _ => None,
        };
        debug!(authenticated = session.is_some(), "session restored");
        Self { storage, session }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Authenticate with email and password and persist the session.
    ///
    /// # Errors
    /// The server's rejection message (or "Login failed"), transport
    /// failures, and storage write failures.
    pub async fn login(
        &mut self,
        client: &FitzClient,
        email: &str,
        password: &str,
    ) -> Result<&Session, ClientError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = client.login(&request).await?;
        self.establish(client, response).await
    }

    /// Validate the registration form, create the account and persist the
    /// session. Invalid forms never reach the network.
    ///
    /// # Errors
    /// [`ClientError::Validation`] for schema failures, otherwise as
    /// [`SessionStore::login`] with the fallback "Registration failed".
    pub async fn register(
        &mut self,
        client: &FitzClient,
        form: &RegisterForm,
    ) -> Result<&Session, ClientError> {
        let request = form.validate()?;
        let response = client.register(&request).await?;
        self.establish(client, response).await
    }

    async fn establish(
        &mut self,
        client: &FitzClient,
        response: AuthResponse,
    ) -> Result<&Session, ClientError> {
        let AuthResponse { token, user } = response;
        let user = match user {
            Some(user) => user,
            None => {
                debug!("auth response carried no user, fetching profile");
                client.with_token(token.clone()).profile().await?
            }
        };

        self.persist(&token, &user)?;
        info!(username = %user.username, "session established");
        Ok(self.session.insert(Session { token, user }))
    }

    /// Write a fresh session. A failed user write takes the new token back
    /// out so storage never holds a token without its user.
    fn persist(&mut self, token: &str, user: &User) -> Result<(), ClientError> {
        let serialized = user_json(user)?;
        self.storage.set(TOKEN_KEY, token)?;
        if let Err(error) = self.storage.set(USER_KEY, &serialized) {
            self.storage.remove(TOKEN_KEY);
            return Err(error.into());
        }
        Ok(())
    }

    /// Clear the session. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        if self.session.take().is_some() {
            info!("session cleared");
        }
    }

    /// Replace the cached user locally; nothing is sent to the server.
    ///
    /// # Errors
    /// [`ClientError::NotAuthenticated`] without a session, or a storage
    /// write failure.
    pub fn update_user(&mut self, user: User) -> Result<&Session, ClientError> {
        let token = self
            .session
            .as_ref()
            .map(|session| session.token.clone())
            .ok_or(ClientError::NotAuthenticated)?;
        self.storage.set(USER_KEY, &user_json(&user)?)?;
        Ok(self.session.insert(Session { token, user }))
    }

    /// Check the persisted token against the server.
    ///
    /// A rejected token destroys the session; a good one refreshes the cached
    /// user.
    ///
    /// # Errors
    /// [`ClientError::NotAuthenticated`] without a session, otherwise the
    /// profile request's failure.
    pub async fn revalidate(&mut self, client: &FitzClient) -> Result<&Session, ClientError> {
        let token = self.token().ok_or(ClientError::NotAuthenticated)?.to_string();
        match client.with_token(token).profile().await {
            Ok(user) => self.update_user(user),
            Err(error) => {
                if error.is_unauthorized() {
                    warn!("persisted token was rejected, logging out");
                    self.logout();
                }
                Err(error)
            }
        }
    }
}

fn user_json(user: &User) -> Result<String, StorageError> {
    serde_json::to_string(user).map_err(|error| StorageError::Write {
        key: USER_KEY.to_string(),
        reason: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{"_id":"u1","username":"lifter","email":"a@b.com"}"#;

    #[test]
    fn test_restore_with_token_and_user() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "t1"), (USER_KEY, USER_JSON)]);
        let store = SessionStore::restore(storage);

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("t1"));
        assert_eq!(store.user().map(|user| user.username.as_str()), Some("lifter"));
    }

    #[test]
    fn test_restore_partial_state_is_logged_out() {
        let token_only = SessionStore::restore(MemoryStorage::with_entries([(TOKEN_KEY, "t1")]));
        assert!(!token_only.is_authenticated());

        let user_only = SessionStore::restore(MemoryStorage::with_entries([(USER_KEY, USER_JSON)]));
        assert!(!user_only.is_authenticated());

        let corrupt = SessionStore::restore(MemoryStorage::with_entries([
            (TOKEN_KEY, "t1"),
            (USER_KEY, "{not json"),
        ]));
        assert!(corrupt.user().is_none());
        assert!(corrupt.token().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "t1"), (USER_KEY, USER_JSON)]);
        let handle = storage.clone();
        let mut store = SessionStore::restore(storage);

        store.logout();
        store.logout();

        assert!(!store.is_authenticated());
        assert!(handle.is_empty());
    }

    #[test]
    fn test_update_user_persists_locally() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "t1"), (USER_KEY, USER_JSON)]);
        let handle = storage.clone();
        let mut store = SessionStore::restore(storage);

        let mut user = store.user().cloned().unwrap();
        user.main_goal = Some("Run a marathon".to_string());
        store.update_user(user).unwrap();

        let persisted: User = serde_json::from_str(&handle.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted.main_goal.as_deref(), Some("Run a marathon"));
        assert_eq!(handle.get(TOKEN_KEY).as_deref(), Some("t1"));

        let reloaded = SessionStore::restore(handle);
        assert_eq!(reloaded.user(), Some(&persisted));
    }

    /// Memory storage whose user writes fail once `fail_user_writes` is set.
    #[derive(Debug, Clone, Default)]
    struct ReadOnlyUserStorage {
        inner: MemoryStorage,
        fail_user_writes: bool,
    }

    impl SessionStorage for ReadOnlyUserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_user_writes && key == USER_KEY {
                return Err(StorageError::Unavailable("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn test_failed_user_update_keeps_persisted_session() {
        let handle = MemoryStorage::with_entries([(TOKEN_KEY, "t1"), (USER_KEY, USER_JSON)]);
        let mut store = SessionStore::restore(ReadOnlyUserStorage {
            inner: handle.clone(),
            fail_user_writes: true,
        });

        let mut user = store.user().cloned().unwrap();
        user.main_goal = Some("Run a marathon".to_string());
        let error = store.update_user(user).unwrap_err();

        assert!(matches!(error, ClientError::Storage(_)));
        assert!(store.is_authenticated());
        assert_eq!(handle.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(handle.get(USER_KEY).as_deref(), Some(USER_JSON));

        let reloaded = SessionStore::restore(handle);
        assert!(reloaded.is_authenticated());
        assert!(reloaded.user().is_some_and(|user| user.main_goal.is_none()));
    }

    #[test]
    fn test_failed_user_write_rolls_back_new_token() {
        let handle = MemoryStorage::new();
        let mut store = SessionStore::restore(ReadOnlyUserStorage {
            inner: handle.clone(),
            fail_user_writes: true,
        });

        let error = store.persist("t9", &User::default()).unwrap_err();

        assert!(matches!(error, ClientError::Storage(_)));
        assert!(handle.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_update_user_requires_session() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        let error = store.update_user(User::default()).unwrap_err();
        assert!(matches!(error, ClientError::NotAuthenticated));
    }
}
