use serde::{Deserialize, Serialize};

use crate::domain::period::PeriodSummary;
use crate::domain::rate::RateResource;

/// Navigation links of a paginated listing. The client does not follow
/// these; callers traverse pages themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Page accounting of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub from: Option<u64>,
    pub last_page: u64,
    pub path: String,
    pub per_page: u64,
    pub to: Option<u64>,
    pub total: u64,
}

/// Envelope pairing one page of resources with its links and meta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub links: PaginationLinks,
    pub meta: PaginationMeta,
}

pub type PaginatedPeriods = Paginated<PeriodSummary>;
pub type PaginatedRates = Paginated<RateResource>;
