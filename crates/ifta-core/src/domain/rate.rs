use serde::{Deserialize, Serialize};

use crate::domain::country::Country;
use crate::domain::period::PeriodSummary;
use crate::domain::timestamp::UtcDateTime;

/// A US state or Canadian province participating in IFTA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub id: u64,
    pub code: String,
    pub country: Country,
    pub external_id: Option<String>,
    pub effective_date: Option<String>,
    pub surcharge: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelType {
    pub id: u64,
    pub name: String,
}

/// Per-unit fuel tax rate for a jurisdiction/fuel-type/period combination.
///
/// The API denormalizes: each rate carries inline copies of its period,
/// jurisdiction and fuel type, so no follow-up lookups are needed. The fuel
/// type is serialized as `fuelType` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResource {
    pub id: u64,
    pub period_id: u64,
    pub jurisdiction_id: u64,
    pub fuel_type_id: u64,
    pub country: Country,
    pub rate: f64,
    pub rate_change: bool,
    pub created_at: Option<UtcDateTime>,
    pub updated_at: Option<UtcDateTime>,
    pub period: PeriodSummary,
    pub jurisdiction: Jurisdiction,
    #[serde(rename = "fuelType")]
    pub fuel_type: FuelType,
}
