use fmp_core::client::{FmpClient, FmpConfig};
use fmp_core::control::FmpControlPlane;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn control_plane(server: &MockServer, api_key: Option<&str>) -> FmpControlPlane {
    let base = Url::parse(&server.uri()).expect("valid mock server URL");
    let config = FmpConfig::new(api_key.map(str::to_string)).with_base_url(base);
    let client = FmpClient::new(config).expect("client should build");
    FmpControlPlane::new(client)
}

#[tokio::test]
async fn quote_roundtrip_renders_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote/AAPL"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "Apple Inc.",
            "price": 150.25,
            "change": 1.5,
            "changesPercentage": 1.01,
            "volume": 1_000_000,
            "marketCap": 2_500_000_000_u64,
            "pe": 28.5,
            "previousClose": 148.75,
            "dayLow": 149.0,
            "dayHigh": 151.0
        }])))
        .mount(&server)
        .await;

    let control = control_plane(&server, Some("test-key"));
    let report = control.stock_quote(" aapl ").await;

    assert!(report.starts_with("Stock Quote: Apple Inc. (AAPL)\n"));
    assert!(report.contains("Current Price: $150.25\n"));
    assert!(report.contains("Volume: 1,000,000\n"));
    assert!(report.contains("Market Cap: $2,500,000,000\n"));
}

#[tokio::test]
async fn profile_roundtrip_renders_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/MSFT"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "companyName": "Microsoft Corporation",
            "industry": "Software - Infrastructure",
            "sector": "Technology",
            "country": "US",
            "mktCap": 3_000_000_000_000_u64,
            "fullTimeEmployees": 221_000,
            "website": "https://www.microsoft.com",
            "ceo": "Satya Nadella",
            "description": "Develops software.",
            "exchangeShortName": "NASDAQ",
            "price": 410.50,
            "beta": 0.9
        }])))
        .mount(&server)
        .await;

    let control = control_plane(&server, Some("test-key"));
    let report = control.company_profile("msft").await;

    assert!(report.starts_with("Company Profile: Microsoft Corporation (MSFT)\n"));
    assert!(report.contains("Sector: Technology\n"));
    assert!(report.contains("Market Cap: $3,000,000,000,000\n"));
    assert!(report.contains("Employees: 221,000\n"));
    assert!(report.contains("Current Price: $410.50\n"));
}

#[tokio::test]
async fn missing_api_key_reports_configuration_error_without_network() {
    let server = MockServer::start().await;
    let control = control_plane(&server, None);

    let quote = control.stock_quote("AAPL").await;
    let profile = control.company_profile("AAPL").await;

    assert_eq!(quote, "Error: FMP_API_KEY environment variable not set");
    assert!(quote.contains("FMP_API_KEY"));
    assert!(profile.contains("FMP_API_KEY"));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn unknown_symbol_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote/ZZZZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile/ZZZZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let control = control_plane(&server, Some("test-key"));
    assert_eq!(
        control.stock_quote("zzzz").await,
        "No data found for symbol: ZZZZ"
    );
    assert_eq!(
        control.company_profile("zzzz").await,
        "No profile found for symbol: ZZZZ"
    );
}

#[tokio::test]
async fn upstream_failure_is_reported_in_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote/AAPL"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let control = control_plane(&server, Some("test-key"));
    let report = control.stock_quote("AAPL").await;
    assert!(report.starts_with("Error: API request failed: "));
}
