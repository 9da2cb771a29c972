//! Version counters that drive refetching after mutations.
//!
//! DESIGN
//! ======
//! Each resource reads the version of the key it depends on; a successful
//! mutation bumps the keys it affects and the resource refetches. Nothing is
//! cached locally beyond what the resources themselves hold.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Credit,
    Notifications,
    Products,
    Product(i64),
    MyProducts,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheState {
    versions: HashMap<CacheKey, u64>,
}

impl CacheState {
    pub fn version(&self, key: CacheKey) -> u64 {
        self.versions.get(&key).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, key: CacheKey) {
        *self.versions.entry(key).or_insert(0) += 1;
    }

    pub fn invalidate_all(&mut self, keys: &[CacheKey]) {
        for key in keys {
            self.invalidate(*key);
        }
    }
}

/// Keys touched by a successful bid.
pub fn after_bid(product_id: i64) -> [CacheKey; 2] {
    [CacheKey::Product(product_id), CacheKey::Credit]
}

/// Keys touched by a successful credit charge.
pub const AFTER_CHARGE: [CacheKey; 1] = [CacheKey::Credit];

/// Keys touched by a new listing.
pub const AFTER_REGISTER: [CacheKey; 2] = [CacheKey::MyProducts, CacheKey::Products];
