use std::time::Duration;

use chrono::NaiveDate;
use dopamine_calendar::domain::providers::{HolidayProvider, ProviderError};
use dopamine_calendar::infrastructure::provider::NagerClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(base_url: String) -> NagerClient {
    NagerClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_parses_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2025/CN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "date": "2025-01-01",
                "localName": "元旦",
                "name": "New Year's Day",
                "countryCode": "CN",
                "types": ["Public"]
            },
            {
                "date": "2025-10-01",
                "localName": "国庆节",
                "name": "National Day",
                "countryCode": "CN",
                "types": ["Public"]
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let holidays = client(server.uri()).fetch("CN", 2025).await.unwrap();

    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(holidays[0].local_name, "元旦");
    assert_eq!(holidays[0].name, "New Year's Day");
    assert_eq!(holidays[0].country, "CN");
    assert_eq!(holidays[0].year, 2025);
    assert!(holidays[0].is_public);
}

#[tokio::test]
async fn test_fetch_maps_observance_as_not_public() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2025/DK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "date": "2025-06-05",
                "localName": "Grundlovsdag",
                "name": "Constitution Day",
                "types": ["Observance"]
            }
        ])))
        .mount(&server)
        .await;

    let holidays = client(server.uri()).fetch("DK", 2025).await.unwrap();

    assert_eq!(holidays.len(), 1);
    assert!(!holidays[0].is_public);
}

#[tokio::test]
async fn test_fetch_tolerates_missing_optional_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2025/US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "date": "2025-07-04", "name": "Independence Day" }
        ])))
        .mount(&server)
        .await;

    let holidays = client(server.uri()).fetch("US", 2025).await.unwrap();

    assert_eq!(holidays[0].local_name, "");
    assert!(holidays[0].is_public);
}

#[tokio::test]
async fn test_fetch_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client(server.uri()).fetch("CN", 2025).await;

    assert!(matches!(result.unwrap_err(), ProviderError::Status(500)));
}

#[tokio::test]
async fn test_fetch_unknown_country_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2025/XX"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(server.uri()).fetch("XX", 2025).await;

    assert!(matches!(result.unwrap_err(), ProviderError::Status(404)));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client(server.uri()).fetch("CN", 2025).await;

    assert!(matches!(result.unwrap_err(), ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = NagerClient::new(server.uri(), Duration::from_millis(50)).unwrap();
    let result = client.fetch("CN", 2025).await;

    assert!(matches!(result.unwrap_err(), ProviderError::Timeout));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2025/CN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let holidays = client(format!("{}/", server.uri()))
        .fetch("CN", 2025)
        .await
        .unwrap();

    assert!(holidays.is_empty());
}
