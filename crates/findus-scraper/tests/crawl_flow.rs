//! End-to-end crawl test: vendor pages and lookup services all served by a
//! single local `wiremock` server, driven through a real [`Session`].

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use findus_core::{AppConfig, ChargerType};
use findus_scraper::{crawl, ScraperError, Session};

fn test_config(server: &MockServer) -> AppConfig {
    let uri = server.uri();
    AppConfig {
        vendor_base_url: uri.clone(),
        registry_url: format!("{uri}/registry"),
        correction_url: format!("{uri}/correction"),
        translation_url: format!("{uri}/translate"),
        destination_lookup_url: format!("{uri}/venues"),
        log_level: "warn".to_owned(),
        request_timeout_secs: 5,
        user_agent: "findus-test/0.1".to_owned(),
        settle_delay_ms: 0,
    }
}

const LIST_HTML: &str = r#"
<address><a href="/ko_kr/findus/location/supercharger/gangnam">강남</a></address>
<address><a href="/ko_kr/findus/location/supercharger/gangnam">강남(중복)</a></address>
"#;

const DETAIL_HTML: &str = r#"
<html><body>
<h1>서울 강남 수퍼차저</h1>
<span class="street-address">서울 강남구 테헤란로 152</span>
<span class="postal-code">6236</span>
<p>충전 안내<br/>최대 250kW로 연중 무휴 이용 가능한 8 수퍼차저</p>
<div id="location-map"><img src="https://maps.example.com/staticmap?scale=2=37.503634,127.049843"/></div>
</body></html>
"#;

#[tokio::test]
async fn crawl_produces_one_deduplicated_station() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ko_kr/findus/list/superchargers/South+Korea"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LIST_HTML))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ko_kr/findus/location/supercharger/gangnam"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_HTML))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/registry"))
        .and(query_param("keyword", "06236 서울 강남구 테헤란로 152"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": {
                "juso": [{
                    "roadAddr": "서울특별시 강남구 테헤란로 152 (역삼동)",
                    "jibunAddr": "서울특별시 강남구 역삼동 737",
                    "zipNo": "06236"
                }]
            }
        })))
        .mount(&server)
        .await;

    let session = Session::open(&test_config(&server)).unwrap();
    let stations = crawl(&session, ChargerType::Supercharger).await.unwrap();
    session.close();

    assert_eq!(stations.len(), 1);
    let station = &stations[0];
    assert_eq!(station.name, "서울 강남 수퍼차저");
    assert_eq!(station.address.name, "서울특별시 강남구 테헤란로 152");
    assert_eq!(station.address.postal_code, "06236");
    assert_eq!(
        station.address.region3.as_deref(),
        Some("서울특별시 강남구 역삼동")
    );
    assert!((station.coordinate.latitude - 37.503_634).abs() < 1e-9);
    assert_eq!(station.chargers.len(), 1);
    assert_eq!(station.chargers[0].max_power_kw, 250);
    assert_eq!(station.chargers[0].port_count, 8);
    assert!(station.is_always_open);
}

#[tokio::test]
async fn unreachable_list_page_fails_the_crawl() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ko_kr/findus/list/superchargers/South+Korea"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = Session::open(&test_config(&server)).unwrap();
    let error = crawl(&session, ChargerType::Supercharger).await.unwrap_err();
    session.close();

    assert!(matches!(
        error,
        ScraperError::UnexpectedStatus { status: 500, .. }
    ));
}
