use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::client::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::error::ApiError;

/// In-memory HttpTransport for testing and offline previews.
///
/// Replies are registered per method and path and stay in place until
/// replaced. Unregistered routes answer 404. Every request is recorded.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method path` with a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, ApiResponse::json(status, &body));
    }

    pub fn respond_raw(&self, method: Method, path: &str, response: ApiResponse) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, path.to_string()), Ok(response));
    }

    /// Make `method path` fail before a response is produced.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, path.to_string()), Err(error));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests sent to `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl HttpTransport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::new(404, r#"{"message":"Not found"}"#)))
    }
}
