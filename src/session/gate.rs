//! Screen reachability
//!
//! A two-state machine over the session: unauthenticated sessions may only
//! reach the login and registration screens, authenticated sessions may
//! reach everything else. Navigation requests to an unreachable screen are
//! redirected rather than refused, so callers can always navigate and let
//! the gate pick the landing screen.

use super::Session;

/// The screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login form
    Login,
    /// Account registration form
    #[default]
    Registration,
    /// Current-month budget and expense overview
    Home,
    /// Expense entry form
    AddExpense,
}

impl Screen {
    /// All screens, in navigation-chrome order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::AddExpense,
            Screen::Login,
            Screen::Registration,
        ]
    }

    /// Human-readable title for navigation chrome
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Registration => "Register",
            Screen::Home => "Current Month",
            Screen::AddExpense => "Add Expense",
        }
    }

    /// Whether this screen requires an authenticated session
    pub fn requires_auth(&self) -> bool {
        match self {
            Screen::Login | Screen::Registration => false,
            Screen::Home | Screen::AddExpense => true,
        }
    }
}

/// Whether the given screen is reachable with this session
pub fn can_access(screen: Screen, session: &Session) -> bool {
    if session.is_authenticated() {
        // Login/registration become unreachable once logged in
        screen.requires_auth()
    } else {
        !screen.requires_auth()
    }
}

/// Where a request for an unreachable screen should land instead
///
/// Returns None when the screen is reachable as requested.
pub fn redirect_target(screen: Screen, session: &Session) -> Option<Screen> {
    if can_access(screen, session) {
        None
    } else if session.is_authenticated() {
        Some(Screen::Home)
    } else {
        Some(Screen::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Session {
        Session::with_token("abc")
    }

    #[test]
    fn test_unauthenticated_reaches_only_auth_screens() {
        let session = Session::new();

        assert!(can_access(Screen::Login, &session));
        assert!(can_access(Screen::Registration, &session));
        assert!(!can_access(Screen::Home, &session));
        assert!(!can_access(Screen::AddExpense, &session));
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let session = Session::new();

        assert_eq!(
            redirect_target(Screen::AddExpense, &session),
            Some(Screen::Login)
        );
        assert_eq!(redirect_target(Screen::Home, &session), Some(Screen::Login));
        assert_eq!(redirect_target(Screen::Login, &session), None);
        assert_eq!(redirect_target(Screen::Registration, &session), None);
    }

    #[test]
    fn test_authenticated_blocks_auth_screens() {
        let session = logged_in();

        assert!(!can_access(Screen::Login, &session));
        assert!(!can_access(Screen::Registration, &session));
        assert!(can_access(Screen::Home, &session));
        assert!(can_access(Screen::AddExpense, &session));
    }

    #[test]
    fn test_authenticated_redirects_to_home() {
        let session = logged_in();

        assert_eq!(redirect_target(Screen::Login, &session), Some(Screen::Home));
        assert_eq!(
            redirect_target(Screen::Registration, &session),
            Some(Screen::Home)
        );
        assert_eq!(redirect_target(Screen::Home, &session), None);
    }

    #[test]
    fn test_login_transition_flips_the_gate() {
        let mut session = Session::new();
        assert!(!can_access(Screen::Home, &session));

        // Successful login stores the token
        session.set_token("abc");
        assert!(can_access(Screen::Home, &session));
        assert!(can_access(Screen::AddExpense, &session));
        assert!(!can_access(Screen::Login, &session));
        assert!(!can_access(Screen::Registration, &session));

        // Logout flips it back
        session.clear();
        assert!(!can_access(Screen::Home, &session));
        assert!(can_access(Screen::Login, &session));
    }
}
