//! The IFTA API client: request building, transport invocation, response
//! decoding and error normalization.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{PaginatedPeriods, PaginatedRates, PeriodDetail, RatesQuery};
use crate::error::IftaError;
use crate::http_client::{
    HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient, ResponseBody,
};

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://truker.app";

/// Construction options for [`IftaClient`].
///
/// Every field is optional: the base URL falls back to the production
/// endpoint, a missing token sends unauthenticated requests, and a missing
/// transport falls back to the bundled reqwest one.
#[derive(Default)]
pub struct IftaClientOptions {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub transport: Option<Arc<dyn HttpClient>>,
}

/// Per-call pass-through options forwarded to the transport.
///
/// Headers are forwarded untouched except that the client force-sets
/// `accept` and (when a token is configured) `authorization` after them.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub timeout_ms: Option<u64>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Read-only client for the IFTA reference-data API.
///
/// Holds only immutable configuration, so one instance is safe for
/// unlimited concurrent calls. Each operation performs exactly one
/// request/response exchange; there are no retries, no caching and no
/// internal timeouts — callers compose those around the transport.
#[derive(Clone)]
pub struct IftaClient {
    base_url: String,
    auth: HttpAuth,
    transport: Arc<dyn HttpClient>,
}

impl IftaClient {
    /// Builds a client from `options`.
    ///
    /// Fails with [`IftaError::Configuration`] when no transport was
    /// supplied and the default one cannot be constructed. This surfaces
    /// before any request is attempted.
    pub fn new(options: IftaClientOptions) -> Result<Self, IftaError> {
        let transport: Arc<dyn HttpClient> = match options.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestHttpClient::new()
                    .map_err(|e| IftaError::Configuration(e.message().to_owned()))?,
            ),
        };

        Ok(Self {
            base_url: options
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            auth: match options.token {
                Some(token) => HttpAuth::BearerToken(token),
                None => HttpAuth::None,
            },
            transport,
        })
    }

    /// Client against the production endpoint with the default transport.
    pub fn with_token(token: impl Into<String>) -> Result<Self, IftaError> {
        Self::new(IftaClientOptions {
            token: Some(token.into()),
            ..IftaClientOptions::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists IFTA periods (one page; callers follow `links` themselves).
    pub async fn list_periods(&self) -> Result<PaginatedPeriods, IftaError> {
        self.list_periods_with(RequestOptions::default()).await
    }

    pub async fn list_periods_with(
        &self,
        options: RequestOptions,
    ) -> Result<PaginatedPeriods, IftaError> {
        self.get_typed("/api/v1/periods", &[], options).await
    }

    /// Fetches a single period by quarter code (e.g. "1Q2024").
    ///
    /// Rejects an empty quarter with [`IftaError::InvalidArgument`] before
    /// any transport activity.
    pub async fn get_period(&self, quarter: &str) -> Result<PeriodDetail, IftaError> {
        self.get_period_with(quarter, RequestOptions::default())
            .await
    }

    pub async fn get_period_with(
        &self,
        quarter: &str,
        options: RequestOptions,
    ) -> Result<PeriodDetail, IftaError> {
        if quarter.trim().is_empty() {
            return Err(IftaError::InvalidArgument { name: "quarter" });
        }

        let path = format!("/api/v1/periods/{}", urlencoding::encode(quarter));
        self.get_typed(&path, &[], options).await
    }

    /// Lists rates, optionally filtered.
    pub async fn list_rates(&self, query: &RatesQuery) -> Result<PaginatedRates, IftaError> {
        self.list_rates_with(query, RequestOptions::default()).await
    }

    pub async fn list_rates_with(
        &self,
        query: &RatesQuery,
        options: RequestOptions,
    ) -> Result<PaginatedRates, IftaError> {
        self.get_typed("/api/v1/rates", &query.to_params(), options)
            .await
    }

    /// The shared pipeline, exposed directly: builds the request, invokes
    /// the transport, sniffs the content type and decodes the body, then
    /// applies the status check. Success bodies come back as the sniffed
    /// [`ResponseBody`] without any schema expectation.
    pub async fn get_raw(
        &self,
        path: &str,
        params: &[(String, String)],
        options: RequestOptions,
    ) -> Result<ResponseBody, IftaError> {
        let mut request = HttpRequest::get(self.resolve_url(path, params));

        for (name, value) in &options.headers {
            request = request.with_header(name.clone(), value.clone());
        }
        // The client's requirements win over caller-supplied values for
        // exactly these two headers.
        request = request
            .with_header("accept", "application/json")
            .with_auth(&self.auth);
        if let Some(timeout_ms) = options.timeout_ms {
            request = request.with_timeout_ms(timeout_ms);
        }

        let response = self.transport.execute(request).await?;

        // Decoded before the status check so structured JSON error payloads
        // reach the caller instead of being discarded.
        let body = response
            .decoded()
            .map_err(|e| IftaError::Decode(e.to_string()))?;

        if !response.is_success() {
            return Err(IftaError::Http {
                status: response.status,
                status_text: response.status_text,
                body,
            });
        }

        Ok(body)
    }

    async fn get_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        options: RequestOptions,
    ) -> Result<T, IftaError> {
        match self.get_raw(path, params, options).await? {
            ResponseBody::Json(value) => {
                serde_json::from_value(value).map_err(|e| IftaError::Decode(e.to_string()))
            }
            ResponseBody::Text(_) => Err(IftaError::Decode(String::from(
                "expected an application/json response body",
            ))),
        }
    }

    fn resolve_url(&self, path: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }
}
