//! Explicit session context
//!
//! The selected registration role and the signed-in user id are the only
//! client-side state that outlives a single form. They live here, in a value
//! handed to whichever component needs them, instead of in ambient storage.
//!
//! Lifecycle: the role is set at selection, the user id at sign-in (or at the
//! end of a successful registration), and both are cleared at logout.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::identifiers::UserId;
use crate::role::Role;

/// Client session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Role picked on the role-selection page
    pub role: Option<Role>,
    /// Authenticated user
    pub user_id: Option<UserId>,
}

impl Session {
    /// Creates an empty (logged-out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the role chosen at selection
    ///
    /// Choosing a different role drops any signed-in user, since a user's role
    /// is fixed at creation.
    pub fn select_role(&mut self, role: Role) {
        if self.role != Some(role) {
            self.user_id = None;
        }
        self.role = Some(role);
    }

    /// Records the authenticated user
    pub fn sign_in(&mut self, role: Role, user_id: UserId) {
        self.role = Some(role);
        self.user_id = Some(user_id);
    }

    /// Clears everything (logout)
    pub fn clear(&mut self) {
        self.role = None;
        self.user_id = None;
    }

    /// Returns true when a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Returns the selected role or an error if none was chosen
    pub fn require_role(&self) -> Result<Role, CoreError> {
        self.role
            .ok_or_else(|| CoreError::session("No role selected"))
    }

    /// Returns the signed-in user or an error if nobody is signed in
    pub fn require_user(&self) -> Result<UserId, CoreError> {
        self.user_id
            .ok_or_else(|| CoreError::session("No user signed in"))
    }

    /// Dashboard route for the current role, if one is selected
    pub fn dashboard_route(&self) -> Option<&'static str> {
        self.role.map(|role| role.dashboard_route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.require_role().is_err());
        assert!(session.require_user().is_err());
    }

    #[test]
    fn test_sign_in_and_clear() {
        let mut session = Session::new();
        session.select_role(Role::Patient);
        session.sign_in(Role::Patient, UserId::new(7));

        assert_eq!(session.require_user().unwrap(), UserId::new(7));
        assert_eq!(session.dashboard_route(), Some("/dashboard/patient"));

        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_switching_role_drops_user() {
        let mut session = Session::new();
        session.sign_in(Role::Patient, UserId::new(7));

        session.select_role(Role::Patient);
        assert!(session.is_authenticated());

        session.select_role(Role::Validator);
        assert!(!session.is_authenticated());
        assert_eq!(session.role, Some(Role::Validator));
    }
}
