//! Session endpoints: who-am-I, login and logout.
//!
//! The session itself is an HTTP-only cookie set by the server; these calls
//! never see a token.

use serde::Deserialize;

use crate::client::{ApiClient, HttpTransport, Method};
use crate::error::ApiResult;
use crate::models::{LoginDraft, UserInfo};

/// `/auth/me` and `/auth/login` answer either `{"user": {...}}` or the bare user.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserBody {
    Wrapped { user: UserInfo },
    Bare(UserInfo),
}

impl From<UserBody> for UserInfo {
    fn from(body: UserBody) -> Self {
        match body {
            UserBody::Wrapped { user } => user,
            UserBody::Bare(user) => user,
        }
    }
}

impl<T: HttpTransport> ApiClient<T> {
    /// Get the user the session cookie belongs to.
    pub async fn current_user(&self) -> ApiResult<UserInfo> {
        let body: UserBody = self.get("/auth/me").await?;
        Ok(body.into())
    }

    /// Log in with email and password. The server sets the session cookie.
    pub async fn login(&self, draft: &LoginDraft) -> ApiResult<UserInfo> {
        let body: UserBody = self.post("/auth/login", draft).await?;
        Ok(body.into())
    }

    /// Log out the current user by clearing the session on the server.
    pub async fn logout(&self) -> ApiResult<()> {
        self.execute::<()>(Method::Post, "/auth/logout", None).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::Role;
    use crate::{ApiClient, ApiError, MemoryTransport, Method};

    #[tokio::test]
    async fn test_current_user_wrapped_or_bare() {
        let transport = MemoryTransport::new();
        let client = ApiClient::new(transport.clone());

        transport.respond(
            Method::Get,
            "/auth/me",
            200,
            json!({"user": {"_id": "u1", "email": "a@corp.io", "role": "admin"}}),
        );
        let user = client.current_user().await.unwrap();
        assert_eq!(user.role, Role::Admin);

        transport.respond(
            Method::Get,
            "/auth/me",
            200,
            json!({"id": "u2", "email": "e@corp.io", "role": "employee", "isActive": false}),
        );
        let user = client.current_user().await.unwrap();
        assert_eq!(user.id, "u2");
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Post,
            "/auth/login",
            400,
            json!({"message": "Invalid email or password"}),
        );
        let client = ApiClient::new(transport);

        let err = client
            .login(&crate::LoginDraft {
                email: "x@corp.io".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_logout_accepts_empty_body() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Post, "/auth/logout", crate::ApiResponse::new(200, ""));
        let client = ApiClient::new(transport.clone());

        client.logout().await.unwrap();
        assert_eq!(transport.count(Method::Post, "/auth/logout"), 1);

        transport.fail(Method::Post, "/auth/logout", ApiError::Transport("offline".into()));
        assert!(client.logout().await.is_err());
    }
}
