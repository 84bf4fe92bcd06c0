use async_trait::async_trait;
use qvapay_core::params::QueryParams;
use reqwest::Response;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ApiResponse, HttpClient};
use crate::{
    config::{default_base_url, HttpOptions},
    error::QvapayError,
};

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client for `https://qvapay.com:443/api/v1`.
    pub fn new(options: &HttpOptions) -> Result<Self, QvapayError> {
        Self::with_base_url(default_base_url()?, options)
    }

    pub fn with_base_url(base_url: Url, options: &HttpOptions) -> Result<Self, QvapayError> {
        let mut builder = reqwest::Client::builder().timeout(options.timeout);
        if let Some(proxy) = &options.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base url. `Url::join` would drop the `/api/v1` prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, QvapayError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    async fn extract_response(response: Response) -> Result<ApiResponse, QvapayError> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_owned(),
                )
            })
            .collect();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(QvapayError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let data = match serde_json::from_str::<Value>(&text) {
            Ok(data) => data,
            Err(_) => Value::String(text),
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            headers,
            data,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<ApiResponse, QvapayError> {
        let url = self.endpoint(path)?;
        // the query string carries the app secret, only the path is logged
        debug!(path, "GET");

        let response = self.client.get(url).query(params).send().await?;
        debug!(path, status = response.status().as_u16(), "response");

        Self::extract_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;

    use super::ReqwestHttpClient;
    use crate::config::HttpOptions;

    #[test]
    fn test_endpoint_keeps_base_path() -> anyhow::Result<()> {
        let client = ReqwestHttpClient::new(&HttpOptions::default())?;
        assert_eq!(
            "https://qvapay.com/api/v1/info",
            client.endpoint("/info")?.as_str()
        );
        assert_eq!(
            "https://qvapay.com/api/v1/transaction/6507ee0d-db6c-4aa9-b59a-75dc7f6eab52",
            client
                .endpoint("/transaction/6507ee0d-db6c-4aa9-b59a-75dc7f6eab52")?
                .as_str()
        );
        Ok(())
    }

    #[test]
    fn test_endpoint_with_trailing_slash() -> anyhow::Result<()> {
        let client = ReqwestHttpClient::with_base_url(
            Url::parse("http://127.0.0.1:8080/api/v1/")?,
            &HttpOptions::default(),
        )?;
        assert_eq!(
            "http://127.0.0.1:8080/api/v1/balance",
            client.endpoint("/balance")?.as_str()
        );
        Ok(())
    }

    #[test]
    fn test_invalid_proxy() {
        let options = HttpOptions::default().with_proxy("not a proxy url");
        assert!(ReqwestHttpClient::new(&options).is_err());
    }
}
