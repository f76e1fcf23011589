use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

/// The IFTA API is read-only; GET is the only method the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// Authentication strategy applied to outgoing HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpAuth {
    None,
    BearerToken(String),
}

impl HttpAuth {
    /// Force-sets the `authorization` header; any caller-supplied value for
    /// that header is overwritten.
    pub fn apply(&self, headers: &mut BTreeMap<String, String>) {
        match self {
            Self::None => {}
            Self::BearerToken(token) => {
                headers.insert(String::from("authorization"), format!("Bearer {token}"));
            }
        }
    }
}

/// HTTP request envelope handed to the transport.
///
/// Header keys are lowercased on insert so lookups and overwrites are
/// case-insensitive. `timeout_ms` is forwarded to the transport; `None`
/// leaves the transport's own default in place — the client never imposes
/// a timeout of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: Option<u64>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_auth(mut self, auth: &HttpAuth) -> Self {
        auth.apply(&mut self.headers);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    /// 200 response with a JSON content type, for stub transports in tests.
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::json(200, "OK", body)
    }

    /// Arbitrary-status response with a JSON content type.
    pub fn json(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            String::from("content-type"),
            String::from("application/json"),
        );
        Self {
            status,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Content-type sniff: a `content-type` containing `application/json`
    /// parses the body as JSON, anything else passes the body through as
    /// text. Applied to success and error responses alike, so structured
    /// JSON error payloads survive decoding.
    pub fn decoded(&self) -> Result<ResponseBody, serde_json::Error> {
        let is_json = self
            .header("content-type")
            .is_some_and(|value| value.contains("application/json"));

        if is_json {
            serde_json::from_str(&self.body).map(ResponseBody::Json)
        } else {
            Ok(ResponseBody::Text(self.body.clone()))
        }
    }
}

/// A response body after the content-type sniff.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
    retryable: bool,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    pub fn non_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract: one request in, one response out.
///
/// The client depends only on this trait, so tests substitute stub
/// implementations and hosts with different HTTP stacks can plug their own.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production transport wrapping `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    /// Builds a client with the default configuration. A builder failure is
    /// a configuration error and is reported before any request is made.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ifta-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::non_retryable(format!("failed to build reqwest client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
            };

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            if let Some(timeout_ms) = request.timeout_ms {
                builder = builder.timeout(std::time::Duration::from_millis(timeout_ms));
            }

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::new(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::new(format!("connection failed: {e}"))
                } else {
                    HttpError::new(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_string();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
                })
                .collect();

            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse {
                status,
                status_text,
                headers,
                body,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_auth_populates_authorization_header() {
        let request = HttpRequest::get("https://example.test/api/v1/periods")
            .with_auth(&HttpAuth::BearerToken(String::from("token-123")));

        assert_eq!(request.header("Authorization"), Some("Bearer token-123"));
    }

    #[test]
    fn no_auth_leaves_headers_untouched() {
        let request = HttpRequest::get("https://example.test/api/v1/periods")
            .with_auth(&HttpAuth::None);

        assert!(request.headers.is_empty());
    }

    #[test]
    fn bearer_auth_overwrites_caller_authorization() {
        let request = HttpRequest::get("https://example.test/api/v1/rates")
            .with_header("Authorization", "Bearer stale")
            .with_auth(&HttpAuth::BearerToken(String::from("fresh")));

        assert_eq!(request.header("authorization"), Some("Bearer fresh"));
    }

    #[test]
    fn json_content_type_decodes_body_as_json() {
        let response = HttpResponse::ok_json(r#"{"message":"hello"}"#);
        let body = response.decoded().expect("valid json");
        assert_eq!(
            body.as_json().and_then(|v| v["message"].as_str()),
            Some("hello")
        );
    }

    #[test]
    fn non_json_content_type_passes_body_through_as_text() {
        let response = HttpResponse {
            status: 200,
            status_text: String::from("OK"),
            headers: BTreeMap::from([(String::from("content-type"), String::from("text/plain"))]),
            body: String::from("{not json}"),
        };
        let body = response.decoded().expect("text never fails to decode");
        assert_eq!(body.as_text(), Some("{not json}"));
    }

    #[test]
    fn missing_content_type_is_treated_as_text() {
        let response = HttpResponse {
            status: 204,
            status_text: String::from("No Content"),
            headers: BTreeMap::new(),
            body: String::new(),
        };
        let body = response.decoded().expect("must decode");
        assert_eq!(body.as_text(), Some(""));
    }

    #[test]
    fn malformed_json_surfaces_a_decode_error() {
        let response = HttpResponse::ok_json("not json");
        assert!(response.decoded().is_err());
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::json(200, "OK", "{}").is_success());
        assert!(HttpResponse::json(204, "No Content", "").is_success());
        assert!(!HttpResponse::json(301, "Moved Permanently", "").is_success());
        assert!(!HttpResponse::json(401, "Unauthorized", "{}").is_success());
    }
}
