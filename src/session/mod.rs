//! Session state for the SimpleBudget client
//!
//! Holds the bearer token for the running process. The session is owned by
//! whichever surface is driving the client (the TUI `App` or a CLI handler)
//! and passed explicitly to API calls; there is no ambient global. The token
//! is never persisted across restarts.

pub mod gate;

pub use gate::{can_access, redirect_target, Screen};

/// In-process authentication state
///
/// A session is either unauthenticated (no token) or authenticated with a
/// non-empty bearer credential. It is written only by the login and logout
/// paths; a failed login leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Create a new, unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from an existing token (e.g. CLI `--token`)
    ///
    /// An empty token yields an unauthenticated session.
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_token(token);
        session
    }

    /// Store the token obtained from a successful login
    ///
    /// An empty token is treated as "no token".
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
    }

    /// Drop the token (logout)
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// The current bearer token, if authenticated
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether this session holds a credential
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut session = Session::new();

        session.set_token("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_empty_token_means_logged_out() {
        let mut session = Session::new();
        session.set_token("");
        assert!(!session.is_authenticated());

        let session = Session::with_token("");
        assert!(!session.is_authenticated());
    }
}
