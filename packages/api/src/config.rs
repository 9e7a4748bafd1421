//! Client configuration from build-time environment variables.
//!
//! The web bundle has no process environment at runtime, so overrides are
//! captured by `option_env!` when the crate is compiled:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `API_BASE_URL` | `http://localhost:5000/api` |
//! | `API_TIMEOUT_SECS` | `15` |
//! | `LOGIN_ROUTE` | `/login` |

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Settings shared by every request the client issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fixed per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Client-side route the app navigates to on a 401.
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_login_route() -> String {
    DEFAULT_LOGIN_ROUTE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            login_route: default_login_route(),
        }
    }
}

impl ClientConfig {
    /// Build the config from compile-time environment overrides.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("API_TIMEOUT_SECS"),
            option_env!("LOGIN_ROUTE"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
        login_route: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let timeout_secs = match timeout_secs.map(str::parse::<u64>) {
            Some(Ok(secs)) if secs > 0 => secs,
            Some(_) => {
                tracing::warn!("Ignoring invalid API_TIMEOUT_SECS, using {}s", defaults.timeout_secs);
                defaults.timeout_secs
            }
            None => defaults.timeout_secs,
        };

        Self {
            base_url: base_url
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout_secs,
            login_route: login_route
                .filter(|s| s.starts_with('/'))
                .map(str::to_string)
                .unwrap_or(defaults.login_route),
        }
    }

    /// Builder method to point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join a request path onto the base URL with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_values(None, None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ClientConfig::from_values(
            Some("https://tasks.example.com/api/"),
            Some("30"),
            Some("/signin"),
        );
        assert_eq!(config.base_url, "https://tasks.example.com/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.login_route, "/signin");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_values(Some("  "), Some("soon"), Some("login"));
        assert_eq!(config, ClientConfig::default());

        let zero = ClientConfig::from_values(None, Some("0"), None);
        assert_eq!(zero.timeout_secs, 15);
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::default().with_base_url("http://host/api/");
        assert_eq!(config.url("/projects"), "http://host/api/projects");
        assert_eq!(config.url("projects/1"), "http://host/api/projects/1");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://x"}"#).unwrap();
        assert_eq!(config.base_url, "http://x");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.login_route, "/login");
    }
}
