use super::*;
use serde_json::json;

#[test]
fn login_response_reads_access_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"xyz"}"#).unwrap();
    assert_eq!(body.access_token, "xyz");
}

#[test]
fn credit_response_accepts_either_field_name() {
    let a: CreditResponse = serde_json::from_str(r#"{"credit":1200}"#).unwrap();
    let b: CreditResponse = serde_json::from_str(r#"{"currentCredit":3400}"#).unwrap();
    assert_eq!(a.credit, 1200);
    assert_eq!(b.credit, 3400);
}

#[test]
fn product_detail_parses_nested_auction() {
    let body = json!({
        "productId": 10,
        "name": "Desk lamp",
        "description": "Brass, works",
        "category": { "categoryId": 3, "bigCategory": "Home", "smallCategory": "Lighting" },
        "imageUrl": "https://cdn.test/lamp.png",
        "sellerId": 5,
        "sellerNickname": "kim",
        "createdAt": "2025-01-02T03:04:05",
        "auction": {
            "auctionId": 77,
            "startBid": 1000,
            "currentBid": 2500,
            "status": "IN_PROGRESS",
            "endAt": "2025-01-09T00:00:00"
        }
    });
    let product: Product = serde_json::from_value(body).unwrap();
    assert_eq!(product.category.as_ref().map(Category::label).as_deref(), Some("Home - Lighting"));
    assert_eq!(product.auction_id(), 77);
    assert_eq!(product.price_floor(), 2500);
    assert!(product.is_open());
}

#[test]
fn product_without_bids_uses_start_bid_floor() {
    let product: Product = serde_json::from_value(json!({
        "id": 4,
        "name": "Chair",
        "auction": { "startBid": 500, "currentBid": 0, "status": "FINISHED" }
    }))
    .unwrap();
    assert_eq!(product.product_id, 4);
    assert_eq!(product.price_floor(), 500);
    assert!(!product.is_open());
}

#[test]
fn auction_id_falls_back_to_product_id() {
    let product: Product = serde_json::from_value(json!({ "productId": 9, "name": "Mug" })).unwrap();
    assert_eq!(product.auction_id(), 9);
    assert_eq!(product.price_floor(), 0);
}

#[test]
fn simple_info_accepts_alternate_names() {
    let info: ProductSimpleInfo = serde_json::from_value(json!({
        "id": 1,
        "name": "Bike",
        "image": "https://cdn.test/bike.png",
        "endAt": "2025-03-01T12:00:00"
    }))
    .unwrap();
    assert_eq!(info.product_id, 1);
    assert_eq!(info.image_url.as_deref(), Some("https://cdn.test/bike.png"));
    assert_eq!(info.current_bid, None);
}

#[test]
fn page_parses_standard_envelope() {
    let page: Page<ProductSimpleInfo> = serde_json::from_value(json!({
        "page": 1,
        "size": 12,
        "totalPages": 3,
        "totalElements": 30,
        "contents": [{ "productId": 2, "name": "Lamp", "currentBid": 100 }]
    }))
    .unwrap();
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.contents.len(), 1);
    assert!(!page.is_empty());
}

#[test]
fn search_request_omits_unset_fields() {
    let request = SearchProductRequest {
        keyword: Some("lamp".to_owned()),
        page: Some(0),
        size: Some(12),
        sort_by: Some(SortBy::EndAt),
        ..SearchProductRequest::default()
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "keyword": "lamp", "page": 0, "size": 12, "sortBy": "END_AT" })
    );
}

#[test]
fn sort_by_parse_defaults_to_newest() {
    assert_eq!(SortBy::parse("CURRENT_BID"), SortBy::CurrentBid);
    assert_eq!(SortBy::parse("bogus"), SortBy::RegisteredAtDesc);
}

#[test]
fn bid_request_uses_camel_case() {
    assert_eq!(
        serde_json::to_value(AuctionBidRequest { bidding_price: 3000 }).unwrap(),
        json!({ "biddingPrice": 3000 })
    );
}

#[test]
fn register_request_builds_form_fields() {
    let request = ProductRegisterRequest {
        name: "Lamp".to_owned(),
        description: "Brass".to_owned(),
        category_id: 3,
        start_bid: 1000,
        end_at: "2025-01-09T00:00:00.000Z".to_owned(),
    };
    let fields = request.form_fields();
    assert_eq!(fields[2], ("categoryId".to_owned(), "3".to_owned()));
    assert_eq!(fields[3], ("startBid".to_owned(), "1000".to_owned()));
    assert_eq!(fields.len(), 5);
}

#[test]
fn notifications_tolerate_unknown_kinds() {
    let body: UnreadNotifications = serde_json::from_value(json!({
        "notifications": [
            { "notificationId": 1, "type": "BID", "title": "Outbid", "message": "Someone bid 3000", "notifiedAt": "2025-01-01T00:00:00", "isRead": false },
            { "type": "SYSTEM", "title": "Maintenance" }
        ]
    }))
    .unwrap();
    assert_eq!(body.notifications[0].kind, NotificationKind::Bid);
    assert_eq!(body.notifications[1].kind, NotificationKind::Other);
    assert_eq!(body.notifications[1].message, "");
}

#[test]
fn hot_keywords_parse_rank() {
    let list: Vec<HotKeyword> = serde_json::from_str(r#"[{"keyword":"lamp","rankNo":1}]"#).unwrap();
    assert_eq!(list[0].rank_no, Some(1));
}
