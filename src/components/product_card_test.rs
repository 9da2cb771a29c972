use super::*;

#[test]
fn product_href_points_at_detail_route() {
    assert_eq!(product_href(42), "/products/42");
}

#[test]
fn bid_label_formats_positive_bids() {
    assert_eq!(bid_label(Some(15_000)), "15,000 won");
}

#[test]
fn bid_label_treats_zero_and_missing_as_no_bids() {
    assert_eq!(bid_label(Some(0)), "No bids yet");
    assert_eq!(bid_label(None), "No bids yet");
}
