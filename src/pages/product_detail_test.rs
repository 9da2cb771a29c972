use super::*;

#[test]
fn parse_product_id_requires_positive_integer() {
    assert_eq!(parse_product_id(Some("42")), Some(42));
    assert_eq!(parse_product_id(Some("0")), None);
    assert_eq!(parse_product_id(Some("abc")), None);
    assert_eq!(parse_product_id(None), None);
}

#[test]
fn validate_bid_accepts_amount_above_floor() {
    assert_eq!(validate_bid("15000", 10_000), Ok(15_000));
    assert_eq!(validate_bid(" 10,001 ", 10_000), Ok(10_001));
}

#[test]
fn validate_bid_rejects_equal_or_lower() {
    assert_eq!(validate_bid("10000", 10_000), Err("Bid more than the current price (10,000 won).".to_owned()));
    assert!(validate_bid("9000", 10_000).is_err());
}

#[test]
fn validate_bid_rejects_non_positive_or_garbage() {
    let invalid = Err("Enter a valid bid amount.".to_owned());
    assert_eq!(validate_bid("", 0), invalid);
    assert_eq!(validate_bid("0", 0), invalid);
    assert_eq!(validate_bid("-5", 0), invalid);
    assert_eq!(validate_bid("12.5", 0), invalid);
    assert_eq!(validate_bid("lots", 0), invalid);
}

#[test]
fn suggested_bid_adds_one_step() {
    assert_eq!(suggested_bid(10_000), "11,000 won or more");
}

#[test]
fn suggested_bid_saturates_at_the_top_of_the_range() {
    assert_eq!(suggested_bid(i64::MAX), format!("{} or more", format_price(i64::MAX)));
    assert_eq!(suggested_bid(i64::MAX - 10), suggested_bid(i64::MAX));
}
