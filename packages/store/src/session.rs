//! # Session: who is signed in
//!
//! [`Session`] is the single source of truth for the authenticated user. It
//! starts in [`SessionState::Checking`] while the `/auth/me` probe runs, then
//! settles on either [`SessionState::Authenticated`] or
//! [`SessionState::Anonymous`].
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`begin_restore`](Session::begin_restore) | One-shot guard: `true` only for the first caller, so `/auth/me` is asked once per app lifetime. |
//! | [`finish_restore`](Session::finish_restore) | Applies the restore result, unless a login already settled the session. |
//! | [`login`](Session::login) / [`logout`](Session::logout) | Local transitions after the matching API call. |
//! | [`expire`](Session::expire) | Drops the user after a 401 from any call. |
//!
//! The role helpers only gate what the UI offers. The server enforces access.

use api::{ApiClient, ApiError, HttpTransport, Role, UserInfo};

/// Error left by a restore that found no session cookie.
pub const NOT_SIGNED_IN: &str = "Not signed in";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Checking,
    Authenticated(UserInfo),
    Anonymous,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    state: SessionState,
    error: Option<String>,
    restore_started: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_checking(&self) -> bool {
        self.state == SessionState::Checking
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Last session-level error, e.g. a failed login.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_restore(&mut self) -> bool {
        if self.restore_started {
            return false;
        }
        self.restore_started = true;
        true
    }

    pub fn finish_restore(&mut self, result: Result<UserInfo, ApiError>) {
        if !self.is_checking() {
            tracing::debug!("Session already settled, ignoring restore result");
            return;
        }
        match result {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.email);
                self.state = SessionState::Authenticated(user);
            }
            Err(e) => {
                tracing::debug!("No session to restore: {}", e);
                self.error = Some(if e.is_unauthorized() {
                    NOT_SIGNED_IN.to_string()
                } else {
                    e.user_message("Could not restore session")
                });
                self.state = SessionState::Anonymous;
            }
        }
    }

    pub fn login(&mut self, user: UserInfo) {
        self.restore_started = true;
        self.error = None;
        self.state = SessionState::Authenticated(user);
    }

    pub fn login_failed(&mut self, error: &ApiError) {
        self.error = Some(error.user_message("Login failed"));
        self.state = SessionState::Anonymous;
    }

    pub fn logout(&mut self) {
        self.restore_started = true;
        self.error = None;
        self.state = SessionState::Anonymous;
    }

    pub fn expire(&mut self) {
        if self.is_authenticated() {
            tracing::warn!("Session expired");
            self.error = Some("Your session has expired. Please log in again.".to_string());
        }
        self.restore_started = true;
        self.state = SessionState::Anonymous;
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|r| roles.contains(&r))
    }

    pub fn can_manage_projects(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn can_pick_projects(&self) -> bool {
        self.has_role(Role::TeamLead)
    }

    pub fn can_manage_assets(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn can_give_feedback(&self) -> bool {
        self.has_any_role(&[Role::Admin, Role::TeamLead])
    }

    pub fn can_send_notifications(&self) -> bool {
        self.has_any_role(&[Role::Admin, Role::TeamLead])
    }

    pub fn can_manage_team(&self) -> bool {
        self.has_role(Role::TeamLead)
    }
}

/// Probe `/auth/me`. Any failure, including 401, means "not signed in".
pub async fn restore<T: HttpTransport>(client: &ApiClient<T>) -> Result<UserInfo, ApiError> {
    client.current_user().await
}

/// Tell the server to end the session. Failures are logged and swallowed:
/// the local session is cleared regardless.
pub async fn end_session<T: HttpTransport>(client: &ApiClient<T>) {
    if let Err(e) = client.logout().await {
        tracing::warn!("Logout request failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{LoginDraft, MemoryTransport, Method};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "ada@example.com".into(),
            name: Some("Ada".into()),
            role,
            is_active: true,
        }
    }

    #[test]
    fn test_restore_runs_once() {
        let mut session = Session::new();
        assert!(session.is_checking());
        assert!(session.begin_restore());
        assert!(!session.begin_restore());
        assert!(!session.begin_restore());
    }

    #[test]
    fn test_restore_failure_is_anonymous() {
        let mut session = Session::new();
        session.begin_restore();
        session.finish_restore(Err(ApiError::Unauthorized));
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(session.error(), Some(NOT_SIGNED_IN));
    }

    #[test]
    fn test_restore_transport_failure_stores_error() {
        let mut session = Session::new();
        session.begin_restore();
        session.finish_restore(Err(ApiError::Transport("connection refused".into())));
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(session.user().is_none());
        assert_eq!(session.error(), Some("Could not restore session"));

        session.login(user(Role::Admin));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_late_restore_does_not_override_login() {
        let mut session = Session::new();
        session.begin_restore();
        session.login(user(Role::Employee));
        session.finish_restore(Err(ApiError::Transport("offline".into())));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_login_failure_keeps_server_message() {
        let mut session = Session::new();
        session.login_failed(&ApiError::Server {
            status: 400,
            message: Some("Invalid credentials".into()),
        });
        assert_eq!(session.error(), Some("Invalid credentials"));

        session.login_failed(&ApiError::Transport("timeout".into()));
        assert_eq!(session.error(), Some("Login failed"));
    }

    #[test]
    fn test_role_gates() {
        let mut session = Session::new();
        assert!(!session.can_give_feedback());

        session.login(user(Role::TeamLead));
        assert!(session.can_give_feedback());
        assert!(session.can_pick_projects());
        assert!(!session.can_manage_assets());

        session.login(user(Role::Employee));
        assert!(!session.can_give_feedback());
        assert!(!session.can_send_notifications());
        assert!(session.has_any_role(&[Role::Employee, Role::Admin]));
    }

    #[test]
    fn test_expire_only_warns_when_signed_in() {
        let mut session = Session::new();
        session.expire();
        assert!(session.error().is_none());

        session.login(user(Role::Admin));
        session.expire();
        assert!(!session.is_authenticated());
        assert!(session.error().is_some());
    }

    #[tokio::test]
    async fn test_restore_from_server() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/auth/me",
            200,
            json!({"user": {"_id": "u1", "email": "ada@example.com", "role": "admin"}}),
        );
        let client = ApiClient::new(transport);

        let mut session = Session::new();
        assert!(session.begin_restore());
        session.finish_restore(restore(&client).await);
        assert_eq!(session.role(), Some(Role::Admin));
    }

    #[tokio::test]
    async fn test_unauthorized_restore_triggers_redirect_hook() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/auth/me", 401, json!({"message": "Not logged in"}));
        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let client = ApiClient::new(transport).on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut session = Session::new();
        session.begin_restore();
        session.finish_restore(restore(&client).await);
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(redirects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_server_fails() {
        let transport = MemoryTransport::new();
        transport.fail(Method::Post, "/auth/logout", ApiError::Transport("offline".into()));
        let client = ApiClient::new(transport.clone());

        let mut session = Session::new();
        session.login(user(Role::Employee));
        end_session(&client).await;
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(transport.count(Method::Post, "/auth/logout"), 1);
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Post,
            "/auth/login",
            200,
            json!({"_id": "u2", "email": "lead@example.com", "role": "teamlead"}),
        );
        let client = ApiClient::new(transport);

        let draft = LoginDraft {
            email: "lead@example.com".into(),
            password: "secret".into(),
        };
        let mut session = Session::new();
        session.login(client.login(&draft).await.unwrap());
        assert!(session.has_role(Role::TeamLead));
    }
}
