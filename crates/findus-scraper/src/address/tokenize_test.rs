use super::*;

#[test]
fn teheran_ro_example_classifies_as_road() {
    let (units, kind) = tokenize("서울 강남구 테헤란로 152");
    assert_eq!(kind, AddressKind::Road);
    // 서울특별시 ends in 시 and therefore classifies into the city slot.
    assert_eq!(units.get(UnitKey::City), "서울특별시");
    assert_eq!(units.get(UnitKey::District), "강남구");
    assert_eq!(units.get(UnitKey::BigRoad), "테헤란로");
    assert_eq!(units.get(UnitKey::BuildingNumber), "152");
}

#[test]
fn lot_form_address_classifies_as_local() {
    let (units, kind) = tokenize("경기도 수원시 팔달구 인계동 1117");
    assert_eq!(kind, AddressKind::Local);
    assert_eq!(units.get(UnitKey::Province), "경기도");
    assert_eq!(units.get(UnitKey::City), "수원시");
    assert_eq!(units.get(UnitKey::District), "팔달구");
    assert_eq!(units.get(UnitKey::Neighborhood), "인계동");
    assert_eq!(units.get(UnitKey::BuildingNumber), "1117");
}

#[test]
fn metro_city_short_form_expands() {
    let (units, _) = tokenize("부산 해운대구 센텀남대로 35");
    assert_eq!(units.get(UnitKey::City), "부산광역시");
}

#[test]
fn metro_city_with_trailing_si_expands() {
    let (units, _) = tokenize("대전시 유성구 엑스포로 1");
    assert_eq!(units.get(UnitKey::City), "대전광역시");
}

#[test]
fn seoul_short_form_expands_to_special_city() {
    let (units, _) = tokenize("서울시 송파구 올림픽로 300");
    assert_eq!(units.get(UnitKey::City), "서울특별시");
}

#[test]
fn sejong_rewrite_duplicates_fragment() {
    // The rewrite appends the full name instead of replacing the token.
    // Documented here verbatim so the duplicated fragment stays visible;
    // fixing it would change canonical output for every Sejong station.
    let (units, _) = tokenize("세종 한누리대로 2130");
    assert_eq!(units.get(UnitKey::City), "세종세종특별자치시");
}

#[test]
fn gangwon_new_name_folds_back_to_legacy() {
    let (units, _) = tokenize("강원특별자치도 춘천시 중앙로 1");
    assert_eq!(units.get(UnitKey::Province), "강원도");
    let (units, _) = tokenize("강원 춘천시 중앙로 1");
    assert_eq!(units.get(UnitKey::Province), "강원도");
}

#[test]
fn glued_road_fragment_splits_into_both_road_slots() {
    let (units, kind) = tokenize("12로34");
    assert_eq!(kind, AddressKind::Road);
    assert_eq!(units.get(UnitKey::BigRoad), "12로");
    assert_eq!(units.get(UnitKey::SubRoad), "34길");
}

#[test]
fn beon_suffix_becomes_sub_road() {
    let (units, _) = tokenize("테헤란로 5번");
    assert_eq!(units.get(UnitKey::SubRoad), "테헤란로5번길");
    assert_eq!(units.get(UnitKey::BigRoad), "");
}

#[test]
fn numbered_sub_road_merges_into_big_road() {
    let (units, kind) = tokenize("서울 강남구 테헤란로 4번길 15");
    assert_eq!(kind, AddressKind::Road);
    assert_eq!(units.get(UnitKey::BigRoad), "");
    assert_eq!(units.get(UnitKey::SubRoad), "테헤란로4번길");
    assert_eq!(units.get(UnitKey::BuildingNumber), "15");
}

#[test]
fn named_sub_road_does_not_merge() {
    let (units, _) = tokenize("서울 종로구 삼청로 팔판길 20");
    assert_eq!(units.get(UnitKey::BigRoad), "삼청로");
    assert_eq!(units.get(UnitKey::SubRoad), "팔판길");
}

#[test]
fn first_match_wins_per_slot() {
    let (units, _) = tokenize("수원시 성남시 중부대로 100");
    assert_eq!(units.get(UnitKey::City), "수원시");
}

#[test]
fn only_first_numeral_claims_building_number() {
    let (units, _) = tokenize("경기도 성남시 분당구 정자동 178-1 25");
    assert_eq!(units.get(UnitKey::BuildingNumber), "178-1");
}

#[test]
fn hyphenated_lot_number_is_accepted() {
    let (units, _) = tokenize("인천 중구 운서동 2850-1");
    assert_eq!(units.get(UnitKey::BuildingNumber), "2850-1");
}

#[test]
fn non_numeric_leftover_word_is_dropped() {
    let (units, kind) = tokenize("서울 강남구 테헤란로 152 삼성빌딩");
    assert_eq!(kind, AddressKind::Road);
    assert_eq!(units.get(UnitKey::BuildingNumber), "152");
}

#[test]
fn repair_road_fragment_appends_gil_to_first_glued_word() {
    assert_eq!(
        repair_road_fragment("서울 강남구 테헤란로4 15"),
        "서울 강남구 테헤란로4길 15"
    );
}

#[test]
fn repair_road_fragment_leaves_clean_addresses_alone() {
    assert_eq!(
        repair_road_fragment("서울 강남구 테헤란로 152"),
        "서울 강남구 테헤란로 152"
    );
}
