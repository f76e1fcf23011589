//! Typed client for the IFTA reference-data API.
//!
//! This crate contains:
//! - Canonical resource models (periods, rates, jurisdictions, footnotes)
//!   and pagination envelopes
//! - An injectable HTTP transport contract with a reqwest-backed default
//! - [`IftaClient`], a read-only client covering the three API operations
//! - A uniform error taxonomy for configuration, argument, HTTP and
//!   transport failures
//!
//! # Example
//! ```no_run
//! use ifta_core::{Country, IftaClient, IftaClientOptions, RatesQuery};
//!
//! # async fn run() -> Result<(), ifta_core::IftaError> {
//! let client = IftaClient::new(IftaClientOptions {
//!     token: Some(String::from("api-token")),
//!     ..IftaClientOptions::default()
//! })?;
//!
//! let rates = client
//!     .list_rates(&RatesQuery::new().quarter("1Q2024").country(Country::Can))
//!     .await?;
//! for rate in &rates.data {
//!     println!("{} {}: {}", rate.jurisdiction.code, rate.fuel_type.name, rate.rate);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod error;
pub mod http_client;

pub use client::{IftaClient, IftaClientOptions, RequestOptions, DEFAULT_BASE_URL};
pub use domain::{
    Country, FilterValue, Footnote, FuelType, Jurisdiction, Paginated, PaginatedPeriods,
    PaginatedRates, PaginationLinks, PaginationMeta, PeriodDetail, PeriodSummary, RateResource,
    RatesQuery, UnauthorizedResponse, UtcDateTime,
};
pub use error::{IftaError, ValidationError};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    ResponseBody,
};
