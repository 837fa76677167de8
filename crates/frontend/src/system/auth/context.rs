use leptos::prelude::*;

use super::storage;

/// Reactive login session shared through the component tree.
///
/// The two signals are `Copy`, so the store can be captured by event
/// handlers and async blocks without cloning ceremony. Every mutation
/// is mirrored to `localStorage`, which is what lets a page reload
/// restore the session in [`SessionStore::load`].
#[derive(Clone, Copy)]
pub struct SessionStore {
    token: RwSignal<Option<String>>,
    username: RwSignal<Option<String>>,
}

impl SessionStore {
    /// Restore the session from whatever the previous visit left in
    /// `localStorage`. Missing keys start the session logged out.
    pub fn load() -> Self {
        Self {
            token: RwSignal::new(storage::get_access_token()),
            username: RwSignal::new(storage::get_username()),
        }
    }

    /// True while an access token is held. Reads through the signal,
    /// so views calling this re-render on login and logout.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|token| token.is_some())
    }

    /// Current access token for request signing. Untracked on purpose:
    /// the HTTP layer reads it outside any reactive scope.
    pub fn access_token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Display name of the logged-in user.
    pub fn username(&self) -> Option<String> {
        self.username.get()
    }

    /// Store the credentials of a fresh login. `token` must be the
    /// non-empty value returned by the token endpoint; callers never
    /// pass an empty token because `is_authenticated` keys off mere
    /// presence.
    pub fn set_login_state(&self, token: &str, username: &str) {
        self.token.set(Some(token.to_string()));
        self.username.set(Some(username.to_string()));
        storage::save_access_token(token);
        storage::save_username(username);
    }

    /// Drop the session from the signals and from `localStorage`.
    /// Calling this while already logged out leaves the same state.
    pub fn logout(&self) {
        self.token.set(None);
        self.username.set(None);
        storage::clear_session();
    }

    /// Expire the session in response to a 401 and run `redirect`.
    ///
    /// Several in-flight requests can fail with 401 at the same time;
    /// only the first call finds a token and acts, the rest are no-ops.
    pub fn react_to_unauthorized(&self, redirect: impl FnOnce()) {
        if self.token.with_untracked(|token| token.is_none()) {
            return;
        }
        self.logout();
        redirect();
    }
}

/// Put the session store into context for the whole app
pub fn provide_session(session: SessionStore) {
    provide_context(session);
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_state_and_storage() {
        storage::clear_session();
        let session = SessionStore::load();
        assert!(!session.is_authenticated());

        session.set_login_state("tok-1", "alice");

        assert!(session.is_authenticated());
        assert_eq!(session.access_token().as_deref(), Some("tok-1"));
        assert_eq!(session.username().as_deref(), Some("alice"));
        assert_eq!(storage::get_access_token().as_deref(), Some("tok-1"));
        assert_eq!(storage::get_username().as_deref(), Some("alice"));
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        storage::clear_session();
        let session = SessionStore::load();
        session.set_login_state("tok-2", "bob");

        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
        assert_eq!(session.username(), None);
        assert_eq!(storage::get_access_token(), None);
        assert_eq!(storage::get_username(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        storage::clear_session();
        let session = SessionStore::load();
        session.set_login_state("tok-3", "carol");

        session.logout();
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(storage::get_access_token(), None);
    }

    #[test]
    fn test_load_restores_persisted_session() {
        storage::clear_session();
        storage::save_access_token("tok-4");
        storage::save_username("dave");

        let session = SessionStore::load();

        assert!(session.is_authenticated());
        assert_eq!(session.access_token().as_deref(), Some("tok-4"));
        assert_eq!(session.username().as_deref(), Some("dave"));
    }

    #[test]
    fn test_authenticated_tracks_token_presence_only() {
        storage::clear_session();
        let session = SessionStore::load();
        assert!(!session.is_authenticated());

        session.set_login_state("tok-5", "erin");
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unauthorized_reaction_runs_once() {
        storage::clear_session();
        let session = SessionStore::load();
        session.set_login_state("tok-6", "frank");

        let mut redirects = 0;
        session.react_to_unauthorized(|| redirects += 1);
        session.react_to_unauthorized(|| redirects += 1);
        session.react_to_unauthorized(|| redirects += 1);

        assert_eq!(redirects, 1);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unauthorized_reaction_without_session_does_nothing() {
        storage::clear_session();
        let session = SessionStore::load();

        let mut redirects = 0;
        session.react_to_unauthorized(|| redirects += 1);

        assert_eq!(redirects, 0);
    }
}
