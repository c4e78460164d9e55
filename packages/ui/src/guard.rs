//! Route gate shared by every page.
//!
//! Pages call [`require_session`] before fetching anything. A missing session,
//! or one with the wrong role, yields a [`Redirect`] to the landing page and the
//! page must not issue any request.

use store::{KeyValueStore, Role, SessionStore, User};

/// Where visitors without a usable session are sent.
pub const ENTRY_ROUTE: &str = "/";

/// Who may open a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Any signed-in user.
    SignedIn,
    /// Signed-in users with this role only.
    Role(Role),
}

impl Access {
    pub const PATIENT: Access = Access::Role(Role::Patient);
    pub const RESEARCHER: Access = Access::Role(Role::Researcher);

    pub fn allows(&self, user: &User) -> bool {
        match self {
            Access::SignedIn => true,
            Access::Role(role) => user.role() == *role,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
}

/// Load the session and check it against `access`.
pub fn require_session<S: KeyValueStore>(
    session: &SessionStore<S>,
    access: Access,
) -> Result<User, Redirect> {
    let redirect = Redirect { to: ENTRY_ROUTE };
    let Some(user) = session.load() else {
        tracing::debug!("no session, redirecting to {}", ENTRY_ROUTE);
        return Err(redirect);
    };
    if !access.allows(&user) {
        tracing::debug!("user {} ({}) denied {:?}", user.id, user.role(), access);
        return Err(redirect);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{patient, researcher};
    use store::MemoryStore;

    #[test]
    fn test_absent_session_redirects() {
        let session = SessionStore::new(MemoryStore::new());
        assert_eq!(
            require_session(&session, Access::SignedIn),
            Err(Redirect { to: "/" })
        );
    }

    #[test]
    fn test_malformed_session_redirects() {
        let store = MemoryStore::new();
        store.set(store::SESSION_KEY, "{\"id\": ");
        let session = SessionStore::new(store);
        assert!(require_session(&session, Access::PATIENT).is_err());
    }

    #[test]
    fn test_role_mismatch_redirects() {
        let session = SessionStore::new(MemoryStore::new());
        session.save(&researcher());
        assert!(require_session(&session, Access::PATIENT).is_err());
        assert!(require_session(&session, Access::RESEARCHER).is_ok());
        assert!(require_session(&session, Access::SignedIn).is_ok());
    }

    #[test]
    fn test_matching_role_returns_user() {
        let session = SessionStore::new(MemoryStore::new());
        session.save(&patient());
        let user = require_session(&session, Access::PATIENT).unwrap();
        assert_eq!(user.condition(), Some("Diabetes"));
    }
}
