//! Production transport on top of `reqwest`.
//!
//! Every request carries the JSON content type and the session cookie. In the
//! browser the cookie is attached by the fetch API (`credentials: include`);
//! natively `reqwest` keeps its own cookie jar. The per-call timeout is fixed
//! by [`ClientConfig`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::client::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::config::ClientConfig;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn builder(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let url = self.config.url(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        builder
    }

    async fn round_trip(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.builder(&request).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Transport("Request timed out".to_string())
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.round_trip(request).await
    }

    // The browser fetch backend has no client-level timeout, so race the
    // request against a timer.
    #[cfg(target_arch = "wasm32")]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use futures::future::{select, Either};

        let call = Box::pin(self.round_trip(request));
        let timer = Box::pin(gloo_timers::future::sleep(self.config.timeout()));
        match select(call, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Transport("Request timed out".to_string())),
        }
    }
}
