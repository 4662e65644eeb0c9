use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Per-request overrides. Defaults to a bodiless GET.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub method: Method,
    pub body: Option<String>,
    /// Sent after the defaults, so a header here replaces a default of the
    /// same name.
    pub headers: Vec<(String, String)>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl FetchOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// What came back, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// One attempt, no timeout. Only a failure to get any response at all is
    /// an error; status codes are left to the caller.
    async fn send(&self, endpoint: &str, options: &FetchOptions) -> Result<RawResponse>;
}

pub struct HttpTransport {
    base_url: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Result<Self> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    fn headers(&self, endpoint: &str, options: &FetchOptions) -> Result<HeaderMap> {
        let invalid = |reason: String| Error::Transport {
            endpoint: endpoint.to_string(),
            source: reason.into(),
        };

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|_| invalid("API key is not a valid header value".into()))?;
        key.set_sensitive(true);
        headers.insert(AUTHORIZATION, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| invalid(format!("invalid header name {name:?}")))?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|_| invalid(format!("invalid value for header {name}")))?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, endpoint: &str, options: &FetchOptions) -> Result<RawResponse> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(method = %options.method, %url, "sending request");

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(self.headers(endpoint, options)?);
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let to_transport = |e: reqwest::Error| Error::Transport {
            endpoint: endpoint.to_string(),
            source: Box::new(e),
        };
        let resp = request.send().await.map_err(to_transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(to_transport)?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(key: &str) -> Result<HttpTransport> {
        HttpTransport::new(SecretString::from(key.to_string()), DEFAULT_BASE_URL)
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(transport(""), Err(Error::MissingApiKey)));
        assert!(matches!(transport("   "), Err(Error::MissingApiKey)));
    }

    #[test]
    fn caller_headers_override_defaults() {
        let t = transport("pk_123").unwrap();
        let opts = FetchOptions::default()
            .header("Content-Type", "text/plain")
            .header("X-Trace", "abc");
        let headers = t.headers("/space/1", &opts).unwrap();
        assert_eq!(headers[AUTHORIZATION], "pk_123");
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers["x-trace"], "abc");
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn api_key_header_is_sensitive() {
        let t = transport("pk_123").unwrap();
        let headers = t.headers("/space/1", &FetchOptions::default()).unwrap();
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert!(!format!("{headers:?}").contains("pk_123"));
        assert!(!headers[CONTENT_TYPE].is_sensitive());

        let opts = FetchOptions::default().header("Authorization", "pk_other");
        let headers = t.headers("/space/1", &opts).unwrap();
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn bad_header_name_is_a_transport_error() {
        let t = transport("pk_123").unwrap();
        let opts = FetchOptions::default().header("bad header", "x");
        assert!(matches!(
            t.headers("/space/1", &opts),
            Err(Error::Transport { .. })
        ));
    }

    #[test]
    fn trailing_slash_on_base_url_is_dropped() {
        let t = HttpTransport::new(SecretString::from("k".to_string()), "http://x/api/").unwrap();
        assert_eq!(t.base_url, "http://x/api");
    }

    #[test]
    fn success_range() {
        let ok = RawResponse { status: 204, body: String::new() };
        let bad = RawResponse { status: 429, body: String::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
