use std::time::Duration;

use url::Url;

pub const DEFAULT_HOST: &str = "qvapay.com";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_BASE_PATH: &str = "/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// `https://qvapay.com:443/api/v1`
pub fn default_base_url() -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "https://{DEFAULT_HOST}:{DEFAULT_PORT}{DEFAULT_BASE_PATH}"
    ))
}

/// Transport settings, applied to every request of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    /// e.g. `socks5h://127.0.0.1:9050`
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: None,
        }
    }
}

impl HttpOptions {
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn with_proxy(self, proxy: impl Into<String>) -> Self {
        Self {
            proxy: Some(proxy.into()),
            ..self
        }
    }

    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            ..self
        }
    }
}
