//! Fixture round-trip tests for the data model.
//!
//! A decoded fixture must re-serialize to exactly the JSON the server sent:
//! any silently dropped or renamed field is schema drift.

use ifta_core::{Country, PaginatedRates, PeriodDetail};

const RATES_PAGE_FIXTURE: &str = r#"{
    "data": [
        {
            "id": 42,
            "period_id": 7,
            "jurisdiction_id": 12,
            "fuel_type_id": 1,
            "country": "CAN",
            "rate": 0.1742,
            "rate_change": true,
            "created_at": "2024-01-02T08:00:00Z",
            "updated_at": null,
            "period": {
                "id": 7,
                "quarter": "1Q2024",
                "title": "First Quarter 2024",
                "link": "https://truker.app/periods/1Q2024",
                "exchange_rate": "1.3441",
                "published_at": "2024-01-01T00:00:00Z",
                "rates_count": 348,
                "footnotes_count": 2
            },
            "jurisdiction": {
                "id": 12,
                "code": "ON",
                "country": "CAN",
                "external_id": "CA-ON",
                "effective_date": "2024-01-01",
                "surcharge": null
            },
            "fuelType": {
                "id": 1,
                "name": "Diesel"
            }
        },
        {
            "id": 43,
            "period_id": 7,
            "jurisdiction_id": 31,
            "fuel_type_id": 2,
            "country": "US",
            "rate": 0.385,
            "rate_change": false,
            "created_at": null,
            "updated_at": null,
            "period": {
                "id": 7,
                "quarter": "1Q2024",
                "title": null,
                "link": null,
                "exchange_rate": null,
                "published_at": null,
                "rates_count": 348,
                "footnotes_count": 2
            },
            "jurisdiction": {
                "id": 31,
                "code": "TX",
                "country": "US",
                "external_id": null,
                "effective_date": null,
                "surcharge": 0.01
            },
            "fuelType": {
                "id": 2,
                "name": "Gasoline"
            }
        }
    ],
    "links": {
        "first": "https://truker.app/api/v1/rates?page=1",
        "last": "https://truker.app/api/v1/rates?page=24",
        "prev": null,
        "next": "https://truker.app/api/v1/rates?page=2"
    },
    "meta": {
        "current_page": 1,
        "from": 1,
        "last_page": 24,
        "path": "https://truker.app/api/v1/rates",
        "per_page": 15,
        "to": 15,
        "total": 348
    }
}"#;

#[test]
fn paginated_rates_fixture_round_trips_without_loss() {
    let page: PaginatedRates = serde_json::from_str(RATES_PAGE_FIXTURE).expect("must deserialize");

    let reserialized = serde_json::to_value(&page).expect("must serialize");
    let original: serde_json::Value =
        serde_json::from_str(RATES_PAGE_FIXTURE).expect("fixture is valid JSON");

    assert_eq!(reserialized, original);
}

#[test]
fn paginated_rates_fixture_decodes_into_typed_fields() {
    let page: PaginatedRates = serde_json::from_str(RATES_PAGE_FIXTURE).expect("must deserialize");

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total, 348);
    assert_eq!(page.links.prev, None);

    let ontario = &page.data[0];
    assert_eq!(ontario.country, Country::Can);
    assert_eq!(ontario.jurisdiction.code, "ON");
    assert_eq!(ontario.period.exchange_rate.as_deref(), Some("1.3441"));
    assert_eq!(ontario.fuel_type.name, "Diesel");
    assert!(ontario.rate_change);
    assert_eq!(
        ontario
            .created_at
            .expect("created_at present")
            .format_rfc3339(),
        "2024-01-02T08:00:00Z"
    );

    let texas = &page.data[1];
    assert_eq!(texas.country, Country::Us);
    assert_eq!(texas.jurisdiction.surcharge, Some(0.01));
    assert_eq!(texas.created_at, None);
}

#[test]
fn period_detail_fixture_round_trips_without_loss() {
    let fixture = r#"{
        "id": 7,
        "quarter": "1Q2024",
        "title": "First Quarter 2024",
        "link": null,
        "exchange_rate": "1.3441",
        "published_at": "2024-03-01T12:00:00Z",
        "rates_count": 1,
        "footnotes_count": 1,
        "rates": [],
        "footnotes": [
            {
                "id": 3,
                "period_id": 7,
                "jurisdiction_id": 12,
                "code": "B",
                "content": "Surcharge applies to propane."
            }
        ]
    }"#;

    let detail: PeriodDetail = serde_json::from_str(fixture).expect("must deserialize");
    assert_eq!(detail.summary.quarter, "1Q2024");
    assert_eq!(detail.footnotes[0].jurisdiction_id, Some(12));

    let reserialized = serde_json::to_value(&detail).expect("must serialize");
    let original: serde_json::Value = serde_json::from_str(fixture).expect("valid JSON");
    assert_eq!(reserialized, original);
}
