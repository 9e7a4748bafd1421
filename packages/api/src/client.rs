//! # HTTP client wrapper
//!
//! [`ApiClient`] is the single configured client every view talks through. It
//! owns an [`HttpTransport`] (the production one is
//! [`ReqwestTransport`](crate::ReqwestTransport), tests use
//! [`MemoryTransport`](crate::MemoryTransport)) and runs every response through
//! the same interceptor:
//!
//! - `401` calls the registered unauthorized hook (navigation to the login
//!   route) before returning [`ApiError::Unauthorized`], regardless of which
//!   view issued the call.
//! - any other non-2xx becomes [`ApiError::Server`] carrying the server's
//!   message when the body has one.
//! - transport failures pass through as [`ApiError::Transport`].
//!
//! There are no retries and no backoff.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::transport::ReqwestTransport;

/// HTTP verbs the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A request as handed to the transport. The path is relative to the
/// configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Raw status and body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }
}

/// Async seam between the client and the network.
pub trait HttpTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Callback fired when any response comes back 401.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// The configured API client. Cheap to clone; clones share the transport and hook.
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("transport", &self.transport)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

impl<T> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            on_unauthorized: None,
        }
    }

    /// Register the global 401 handler.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::Get, path, Vec::new(), None).await
    }

    pub async fn get_with<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ApiResult<R> {
        self.request(Method::Get, path, query, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::Post, path, Vec::new(), Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::Put, path, Vec::new(), Some(body)).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::Patch, path, Vec::new(), Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::Delete, path, Vec::new(), None).await
    }

    /// Issue a request and decode the JSON body into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> ApiResult<R> {
        let text = self
            .dispatch(ApiRequest {
                method,
                path: path.to_string(),
                query,
                body,
            })
            .await?;
        decode(&text)
    }

    /// Issue a request whose response body is not needed.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<()> {
        let body = body.map(encode).transpose()?;
        self.dispatch(ApiRequest {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body,
        })
        .await
        .map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest) -> ApiResult<String> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(?method, %path, "API request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(?method, %path, "API request failed: {}", e);
                return Err(e);
            }
        };

        if response.status == 401 {
            tracing::info!(%path, "Session rejected, redirecting to login");
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        if !(200..300).contains(&response.status) {
            let err = ApiError::from_status(response.status, &response.body);
            tracing::warn!(?method, %path, "{}", err);
            return Err(err);
        }

        Ok(response.body)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Payload(e.to_string()))
}

fn decode<R: DeserializeOwned>(text: &str) -> ApiResult<R> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::MemoryTransport;

    fn counting_client(transport: MemoryTransport) -> (ApiClient<MemoryTransport>, Arc<AtomicUsize>) {
        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let client = ApiClient::new(transport).on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (client, redirects)
    }

    #[tokio::test]
    async fn test_401_triggers_redirect_for_any_call() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/projects", 401, json!({"message": "expired"}));
        transport.respond(Method::Post, "/assets", 401, json!({}));
        let (client, redirects) = counting_client(transport);

        let err = client.get::<Value>("/projects").await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(redirects.load(Ordering::SeqCst), 1);

        let err = client.post::<_, Value>("/assets", &json!({"name": "x"})).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(redirects.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Delete, "/tasks/7", 409, json!({"message": "Task has time logs"}));
        let (client, redirects) = counting_client(transport);

        let err = client.delete::<Value>("/tasks/7").await.unwrap_err();
        assert_eq!(err.user_message("Failed to delete"), "Task has time logs");
        assert_eq!(redirects.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let transport = MemoryTransport::new();
        transport.fail(Method::Get, "/reports", ApiError::Transport("timed out".into()));
        let client = ApiClient::new(transport);

        let err = client.get::<Value>("/reports").await.unwrap_err();
        assert_eq!(err, ApiError::Transport("timed out".into()));
    }

    #[tokio::test]
    async fn test_query_and_body_reach_transport() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Patch, "/tasks/3/status", 200, json!({"ok": true}));
        let client = ApiClient::new(transport.clone());

        let _: Value = client
            .patch("/tasks/3/status", &json!({"status": "completed"}))
            .await
            .unwrap();
        let _ = client
            .get_with::<Value>("/tasks", vec![("page".into(), "2".into())])
            .await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].body, Some(json!({"status": "completed"})));
        assert_eq!(requests[1].query, vec![("page".to_string(), "2".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_unit() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Post, "/auth/logout", ApiResponse::new(204, ""));
        let client = ApiClient::new(transport);

        client
            .execute::<Value>(Method::Post, "/auth/logout", None)
            .await
            .unwrap();
        client
            .post::<_, ()>("/auth/logout", &json!({}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_payload_error() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Get, "/projects/1", ApiResponse::new(200, "not json"));
        let client = ApiClient::new(transport);

        let err = client.get::<Vec<String>>("/projects/1").await.unwrap_err();
        assert!(matches!(err, ApiError::Payload(_)));
    }
}
