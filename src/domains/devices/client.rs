//! HTTP client for the Tailscale REST API.
//!
//! [`TailscaleClient`] wraps `reqwest::Client` and sends every request with
//! the configured bearer token. Responses are returned as `serde_json::Value`;
//! typed decoding happens in the device service.
//!
//! ## Error handling
//!
//! Any non-2xx response becomes [`ApiError::Status`] carrying the numeric
//! status and its reason phrase. Requests are attempted once.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use super::error::ApiError;
use crate::core::config::TailscaleConfig;

/// Per-request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method, GET unless overridden.
    pub method: Method,

    /// Extra headers. `Authorization` and `Content-Type` are always replaced
    /// by the client's own values.
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    /// Add an extra header.
    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Authenticated client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct TailscaleClient {
    http: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
}

impl TailscaleClient {
    /// Build a client from configuration.
    ///
    /// Fails if the key contains bytes that are not valid in a header.
    pub fn new(config: &TailscaleConfig) -> Result<Self, ApiError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        authorization.set_sensitive(true);

        let http = reqwest::Client::builder()
            .user_agent(concat!("tailscale-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    /// The API base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `endpoint` (relative to the base URL) and return the JSON body.
    pub async fn call(&self, endpoint: &str, options: RequestOptions) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = options.headers;
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!("{} {}", options.method, endpoint);

        let resp = self
            .http
            .request(options.method, url)
            .headers(headers)
            .send()
            .await
            .inspect_err(|e| warn!("Tailscale API request failed: {}", e))?;

        Self::handle_response(resp).await
    }

    /// Returns the JSON body on success, or [`ApiError::Status`] on failure.
    async fn handle_response(resp: reqwest::Response) -> Result<serde_json::Value, ApiError> {
        let status = resp.status();

        if !status.is_success() {
            warn!("Tailscale API returned {}", status);
            return Err(ApiError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TailscaleClient {
        let config = TailscaleConfig::new("tskey-test").with_api_url(server.uri());
        TailscaleClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_sends_bearer_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tailnet/-/devices"))
            .and(header("authorization", "Bearer tskey-test"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "devices": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .call("/tailnet/-/devices", RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(body, serde_json::json!({ "devices": [] }));
    }

    #[tokio::test]
    async fn test_caller_cannot_override_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer tskey-test"))
            .and(header("x-extra", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let options = RequestOptions::default()
            .with_header(AUTHORIZATION, HeaderValue::from_static("Bearer forged"))
            .with_header(HeaderName::from_static("x-extra"), HeaderValue::from_static("1"));

        let result = client_for(&server).call("/anything", options).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call("/tailnet/-/devices", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "Tailscale API error: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call("/tailnet/-/devices", RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Tailscale API error: 401 Unauthorized");
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call("/tailnet/-/devices", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let config = TailscaleConfig::new("bad\nkey");
        assert!(matches!(
            TailscaleClient::new(&config),
            Err(ApiError::InvalidCredential(_))
        ));
    }

    #[test]
    fn test_base_url_trimmed() {
        let mut config = TailscaleConfig::new("k");
        config.api_url = "http://example.test/api/v2/".to_string();
        let client = TailscaleClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://example.test/api/v2");
    }
}
