//! Session Gate
//!
//! Holds the authentication credential and display identity. Both fields
//! are written and cleared together; a session persists in browser storage
//! across reloads until explicit logout.

use std::sync::Arc;

use leptos::prelude::*;

use crate::context::Screen;

const TOKEN_KEY: &str = "userToken";
const IDENTITY_KEY: &str = "username";

/// Storage backend behind the session. The app uses browser localStorage;
/// tests substitute an in-memory map.
pub trait CredentialStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// localStorage-backed credential store
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CredentialStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct SessionData {
    credential: String,
    identity: String,
}

/// Process-wide session state with an explicit establish/clear lifecycle.
///
/// Presence is reactive, so screen gating re-evaluates on login/logout.
#[derive(Clone)]
pub struct Session {
    data: RwSignal<Option<SessionData>>,
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// Picks up a persisted session from the store, if one exists. A
    /// half-written pair counts as no session.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let data = match (store.read(TOKEN_KEY), store.read(IDENTITY_KEY)) {
            (Some(credential), Some(identity)) => Some(SessionData { credential, identity }),
            _ => None,
        };
        Self {
            data: RwSignal::new(data),
            store,
        }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStore))
    }

    /// Reactive: true while a credential is held
    pub fn has_session(&self) -> bool {
        self.data.with(|d| d.is_some())
    }

    pub fn credential(&self) -> Option<String> {
        self.data.with(|d| d.as_ref().map(|d| d.credential.clone()))
    }

    pub fn identity(&self) -> Option<String> {
        self.data.with(|d| d.as_ref().map(|d| d.identity.clone()))
    }

    /// Store credential and identity together. Called exactly once per
    /// successful login or signup response.
    pub fn establish(&self, credential: &str, identity: &str) {
        self.store.write(TOKEN_KEY, credential);
        self.store.write(IDENTITY_KEY, identity);
        self.data.set(Some(SessionData {
            credential: credential.to_string(),
            identity: identity.to_string(),
        }));
    }

    /// Logout: removes both fields together
    pub fn clear(&self) {
        self.store.delete(TOKEN_KEY);
        self.store.delete(IDENTITY_KEY);
        self.data.set(None);
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Gate applied to screen dispatch: an unauthenticated visitor never
/// reaches a protected screen (and the component behind it is never
/// instantiated, so no authenticated request can fire), while an
/// authenticated visitor skips the entry screens.
pub fn resolve_screen(requested: Screen, authenticated: bool) -> Screen {
    if requested.is_protected() && !authenticated {
        Screen::Login
    } else if !requested.is_protected() && authenticated {
        Screen::Dashboard
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore(Mutex<HashMap<String, String>>);

    impl CredentialStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key).cloned()
        }
        fn write(&self, key: &str, value: &str) {
            self.0.lock().unwrap().insert(key.to_string(), value.to_string());
        }
        fn delete(&self, key: &str) {
            self.0.lock().unwrap().remove(key);
        }
    }

    fn memory_session() -> (Session, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (Session::new(store.clone()), store)
    }

    #[test]
    fn establish_then_clear() {
        let (session, _) = memory_session();
        assert!(!session.has_session());

        session.establish("token-1", "Robin");
        assert!(session.has_session());
        assert_eq!(session.identity().as_deref(), Some("Robin"));
        assert_eq!(session.credential().as_deref(), Some("token-1"));

        session.clear();
        assert!(!session.has_session());
        assert_eq!(session.identity(), None);
        assert_eq!(session.credential(), None);
    }

    #[test]
    fn identity_and_credential_are_always_paired() {
        let (session, store) = memory_session();
        session.establish("token-1", "Robin");
        assert!(store.read(TOKEN_KEY).is_some());
        assert!(store.read(IDENTITY_KEY).is_some());

        session.clear();
        assert!(store.read(TOKEN_KEY).is_none());
        assert!(store.read(IDENTITY_KEY).is_none());
    }

    #[test]
    fn session_survives_reconstruction_from_the_same_store() {
        let store = Arc::new(MemoryStore::default());
        Session::new(store.clone()).establish("token-1", "Robin");

        let revived = Session::new(store);
        assert!(revived.has_session());
        assert_eq!(revived.identity().as_deref(), Some("Robin"));
    }

    #[test]
    fn half_written_storage_counts_as_absent() {
        let store = Arc::new(MemoryStore::default());
        store.write(TOKEN_KEY, "orphan");

        let session = Session::new(store);
        assert!(!session.has_session());
        assert_eq!(session.identity(), None);
    }

    #[test]
    fn protected_screens_redirect_without_a_session() {
        assert_eq!(resolve_screen(Screen::Dashboard, false), Screen::Login);
        assert_eq!(
            resolve_screen(Screen::Tasks { project: None }, false),
            Screen::Login
        );
        assert_eq!(resolve_screen(Screen::Dashboard, true), Screen::Dashboard);
    }

    #[test]
    fn entry_screens_redirect_when_already_signed_in() {
        assert_eq!(resolve_screen(Screen::Login, true), Screen::Dashboard);
        assert_eq!(resolve_screen(Screen::Signup, true), Screen::Dashboard);
        assert_eq!(resolve_screen(Screen::Login, false), Screen::Login);
        assert_eq!(resolve_screen(Screen::Signup, false), Screen::Signup);
    }

    #[test]
    fn logout_gates_protected_entry_regardless_of_prior_state() {
        let (session, _) = memory_session();
        session.establish("token-1", "Robin");
        session.clear();
        assert_eq!(
            resolve_screen(
                Screen::Tasks { project: Some("p1".into()) },
                session.has_session()
            ),
            Screen::Login
        );
    }
}
