use super::*;

#[test]
fn build_search_request_omits_blank_keyword() {
    let request = build_search_request(&SearchFilters { keyword: "   ".to_owned(), ..SearchFilters::default() });
    assert_eq!(request.keyword, None);
    assert_eq!(request.page, Some(0));
    assert_eq!(request.size, Some(PAGE_SIZE));
    assert_eq!(request.sort_by, Some(SortBy::RegisteredAtDesc));
}

#[test]
fn build_search_request_carries_filters() {
    let filters = SearchFilters {
        keyword: " camera ".to_owned(),
        category_id: Some(7),
        sort_by: SortBy::EndAt,
        page: 2,
    };
    let request = build_search_request(&filters);
    assert_eq!(request.keyword.as_deref(), Some("camera"));
    assert_eq!(request.category_id, Some(7));
    assert_eq!(request.page, Some(2));
    assert_eq!(request.sort_by, Some(SortBy::EndAt));
}

#[test]
fn search_request_serializes_camel_case() {
    let filters = SearchFilters { keyword: "bag".to_owned(), sort_by: SortBy::CurrentBid, ..SearchFilters::default() };
    let json = serde_json::to_value(build_search_request(&filters)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"keyword": "bag", "page": 0, "size": 12, "sortBy": "CURRENT_BID"})
    );
}

#[test]
fn parse_category_treats_empty_as_all() {
    assert_eq!(parse_category(""), None);
    assert_eq!(parse_category("12"), Some(12));
    assert_eq!(parse_category("x"), None);
}

#[test]
fn page_label_is_one_based() {
    assert_eq!(page_label(0, 5), "Page 1 of 5");
    assert_eq!(page_label(4, 5), "Page 5 of 5");
    assert_eq!(page_label(0, 0), "Page 1 of 1");
}

#[test]
fn has_next_page_stops_at_last_page() {
    assert!(has_next_page(0, 2));
    assert!(!has_next_page(1, 2));
    assert!(!has_next_page(0, 0));
}
