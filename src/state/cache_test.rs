use super::*;

#[test]
fn versions_start_at_zero() {
    let cache = CacheState::default();
    assert_eq!(cache.version(CacheKey::Credit), 0);
    assert_eq!(cache.version(CacheKey::Product(3)), 0);
}

#[test]
fn invalidate_bumps_only_that_key() {
    let mut cache = CacheState::default();
    cache.invalidate(CacheKey::Credit);
    cache.invalidate(CacheKey::Credit);
    assert_eq!(cache.version(CacheKey::Credit), 2);
    assert_eq!(cache.version(CacheKey::Notifications), 0);
}

#[test]
fn product_keys_are_per_product() {
    let mut cache = CacheState::default();
    cache.invalidate(CacheKey::Product(1));
    assert_eq!(cache.version(CacheKey::Product(1)), 1);
    assert_eq!(cache.version(CacheKey::Product(2)), 0);
}

#[test]
fn bid_invalidates_product_and_credit() {
    let mut cache = CacheState::default();
    cache.invalidate_all(&after_bid(9));
    assert_eq!(cache.version(CacheKey::Product(9)), 1);
    assert_eq!(cache.version(CacheKey::Credit), 1);
    assert_eq!(cache.version(CacheKey::MyProducts), 0);
}

#[test]
fn register_invalidates_listings() {
    let mut cache = CacheState::default();
    cache.invalidate_all(&AFTER_REGISTER);
    cache.invalidate_all(&AFTER_CHARGE);
    assert_eq!(cache.version(CacheKey::MyProducts), 1);
    assert_eq!(cache.version(CacheKey::Products), 1);
    assert_eq!(cache.version(CacheKey::Credit), 1);
}
