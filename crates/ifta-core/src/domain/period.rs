use serde::{Deserialize, Serialize};

use crate::domain::rate::RateResource;
use crate::domain::timestamp::UtcDateTime;

/// One quarterly reporting interval, as it appears in period listings and
/// embedded inside rate resources.
///
/// `exchange_rate` is a string-encoded decimal (the server publishes the
/// US/CAN exchange rate with fixed precision and we keep it verbatim).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub id: u64,
    /// Quarter code such as "1Q2024".
    pub quarter: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub exchange_rate: Option<String>,
    pub published_at: Option<UtcDateTime>,
    pub rates_count: u64,
    pub footnotes_count: u64,
}

/// A single period with its full rate and footnote lists, returned only by
/// the single-period fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodDetail {
    #[serde(flatten)]
    pub summary: PeriodSummary,
    pub rates: Vec<RateResource>,
    pub footnotes: Vec<Footnote>,
}

/// Supplementary annotation attached to a period, optionally scoped to a
/// jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub id: u64,
    pub period_id: u64,
    pub jurisdiction_id: Option<u64>,
    pub code: String,
    pub content: String,
}

/// Body shape the API uses for 401 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnauthorizedResponse {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_detail_flattens_summary_fields() {
        let json = r#"{
            "id": 7,
            "quarter": "1Q2024",
            "title": "First Quarter 2024",
            "link": null,
            "exchange_rate": "1.3441",
            "published_at": "2024-03-01T12:00:00Z",
            "rates_count": 0,
            "footnotes_count": 1,
            "rates": [],
            "footnotes": [
                {
                    "id": 3,
                    "period_id": 7,
                    "jurisdiction_id": null,
                    "code": "A",
                    "content": "Rates pending legislative approval."
                }
            ]
        }"#;

        let detail: PeriodDetail = serde_json::from_str(json).expect("must deserialize");
        assert_eq!(detail.summary.quarter, "1Q2024");
        assert_eq!(detail.summary.exchange_rate.as_deref(), Some("1.3441"));
        assert!(detail.rates.is_empty());
        assert_eq!(detail.footnotes[0].code, "A");
        assert_eq!(detail.footnotes[0].jurisdiction_id, None);
    }
}
