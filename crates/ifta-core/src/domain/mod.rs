//! Typed resources of the IFTA reference-data API.
//!
//! All entities are immutable value records produced fresh on each decode;
//! they have no identity beyond their fields and no behavior beyond
//! construction helpers.

mod country;
mod pagination;
mod period;
mod query;
mod rate;
mod timestamp;

pub use country::Country;
pub use pagination::{Paginated, PaginatedPeriods, PaginatedRates, PaginationLinks, PaginationMeta};
pub use period::{Footnote, PeriodDetail, PeriodSummary, UnauthorizedResponse};
pub use query::{FilterValue, RatesQuery};
pub use rate::{FuelType, Jurisdiction, RateResource};
pub use timestamp::UtcDateTime;
