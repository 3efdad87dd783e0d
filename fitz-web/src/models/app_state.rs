use shared::{Session, SessionStore, models::User};
use yewdux::{Context, Store};

use crate::storage::BrowserStorage;

/// Application-wide state.
///
/// The session is restored from local storage when the store is first
/// created, before any route renders. Dark mode is not persisted.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct AppState {
    pub session: Option<Session>,
    pub dark_mode: bool,
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self::restored()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AppState {
    /// State rebuilt from the persisted session.
    pub fn restored() -> Self {
        Self {
            session: SessionStore::restore(BrowserStorage).session().cloned(),
            dark_mode: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|session| session.token.clone())
    }

    pub const fn theme(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "t1".to_string(),
            user: User {
                username: "lifter".to_string(),
                ..User::default()
            },
        }
    }

    #[test]
    fn test_logged_out_by_default() {
        let state = AppState::default();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.token().is_none());
        assert_eq!(state.theme(), "light");
    }

    #[test]
    fn test_session_accessors() {
        let state = AppState {
            session: Some(session()),
            dark_mode: true,
        };
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|user| user.username.as_str()), Some("lifter"));
        assert_eq!(state.token().as_deref(), Some("t1"));
        assert_eq!(state.theme(), "dark");
    }
}
