use super::*;

const DETAIL_HTML: &str = r##"
<html><body>
<h1>Tesla 수퍼차저 - 서울 강남</h1>
<div class="vcard">
  <span class="street-address">서울 강남구 테헤란로 152</span>
  <span class="locality">강남구</span>
  <span class="postal-code">6236</span>
  <p>충전 정보<br/>최대 250kW로 연중 무휴 이용 가능한 8 수퍼차저<br/>호텔 고객 전용</p>
  <span class="tel">02-1234-5678</span>
  <a class="url" href="https://example.com/hotel">웹사이트</a>
  <ul class="amenities">
    <li><a href="#">화장실</a></li>
    <li><a href="#">카페</a></li>
  </ul>
</div>
<div id="location-map">
  <img src="https://maps.example.com/staticmap?zoom=13&scale=2=37.503634,127.049843&size=600x300"/>
</div>
</body></html>
"##;

#[test]
fn detail_page_extracts_all_fields() {
    let page = parse_detail_page(DETAIL_HTML, "https://vendor.example/findus/gangnam").unwrap();

    assert_eq!(page.name, "Tesla 수퍼차저 - 서울 강남");
    assert_eq!(page.address_line.as_deref(), Some("서울 강남구 테헤란로 152"));
    assert_eq!(page.postal_code, "06236");
    assert_eq!(
        page.charger_lines,
        vec![
            "충전 정보".to_owned(),
            "최대 250kW로 연중 무휴 이용 가능한 8 수퍼차저".to_owned(),
            "호텔 고객 전용".to_owned(),
        ]
    );
    let coordinate = page.coordinate.unwrap();
    assert!((coordinate.latitude - 37.503_634).abs() < 1e-9);
    assert!((coordinate.longitude - 127.049_843).abs() < 1e-9);
    assert_eq!(page.website.as_deref(), Some("https://example.com/hotel"));
    assert_eq!(page.phone.as_deref(), Some("02-1234-5678"));
    assert_eq!(page.amenities, vec!["화장실".to_owned(), "카페".to_owned()]);
    assert!(!page.opening_soon);
}

#[test]
fn missing_title_is_structural() {
    let err = parse_detail_page("<html><body></body></html>", "https://vendor.example/x")
        .unwrap_err();
    assert!(matches!(err, ScraperError::Structural { .. }));
}

#[test]
fn find_us_title_means_opening_soon() {
    let html = "<h1>Find Us | Tesla</h1>";
    let page = parse_detail_page(html, "https://vendor.example/x").unwrap();
    assert!(page.opening_soon);
}

#[test]
fn ribbon_badge_means_opening_soon() {
    let html = r#"<h1>부산 기장</h1><span class="card-type_icon tsla-icon-star-ribbon"></span>"#;
    let page = parse_detail_page(html, "https://vendor.example/x").unwrap();
    assert!(page.opening_soon);
}

#[test]
fn non_numeric_postal_code_is_dropped() {
    let html = r#"<h1>대구 수성</h1><span class="postal-code">ABC-123</span>"#;
    let page = parse_detail_page(html, "https://vendor.example/x").unwrap();
    assert_eq!(page.postal_code, "");
}

#[test]
fn overlong_postal_code_is_dropped() {
    let html = r#"<h1>대구 수성</h1><span class="postal-code">123456</span>"#;
    let page = parse_detail_page(html, "https://vendor.example/x").unwrap();
    assert_eq!(page.postal_code, "");
}

#[test]
fn list_page_yields_detail_urls_in_order() {
    let html = r#"
      <address><a href="/ko_kr/findus/location/supercharger/gangnam">강남</a></address>
      <address><a href="https://other.example/abs">절대</a></address>
    "#;
    let urls = extract_detail_urls(html, "https://www.tesla.com/");
    assert_eq!(
        urls,
        vec![
            "https://www.tesla.com/ko_kr/findus/location/supercharger/gangnam".to_owned(),
            "https://other.example/abs".to_owned(),
        ]
    );
}

#[test]
fn map_url_without_scale_triplet_has_no_coordinate() {
    assert!(coordinate_from_map_url("https://maps.example.com/staticmap?zoom=13&scale=2").is_none());
}

#[test]
fn map_coordinate_is_rounded_to_six_decimals() {
    let coordinate =
        coordinate_from_map_url("https://m.example.com/map?scale=1=37.1234567891,127.00000049")
            .unwrap();
    assert!((coordinate.latitude - 37.123_457).abs() < 1e-9);
    assert!((coordinate.longitude - 127.0).abs() < 1e-9);
}
