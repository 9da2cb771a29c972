//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. A few endpoints disagree
//! on naming (`id` vs `productId`, `image` vs `imageUrl`, `credit` vs
//! `currentCredit`); serde aliases absorb those so pages see one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================
// Members and credit
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreditResponse {
    #[serde(alias = "currentCredit", default)]
    pub credit: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CreditChargeRequest {
    pub amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditChargeResponse {
    pub current_credit: i64,
}

// =============================================================
// Products and auctions
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub big_category: String,
    pub small_category: String,
}

impl Category {
    pub fn label(&self) -> String {
        format!("{} - {}", self.big_category, self.small_category)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    #[default]
    InProgress,
    Finished,
    Expired,
}

impl AuctionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "Live",
            Self::Finished => "Sold",
            Self::Expired => "Expired",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionInfo {
    #[serde(alias = "id")]
    pub auction_id: Option<i64>,
    #[serde(default)]
    pub start_bid: i64,
    #[serde(default)]
    pub current_bid: i64,
    #[serde(default)]
    pub status: AuctionStatus,
    pub end_at: Option<String>,
    pub winner_nickname: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "id")]
    pub product_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<Category>,
    #[serde(alias = "image", default)]
    pub image_url: Option<String>,
    pub seller_id: Option<i64>,
    pub seller_nickname: Option<String>,
    pub created_at: Option<String>,
    pub auction: Option<AuctionInfo>,
}

impl Product {
    /// Price a new bid has to beat: the current bid, or the start bid when
    /// nobody has bid yet.
    pub fn price_floor(&self) -> i64 {
        match &self.auction {
            Some(a) if a.current_bid > 0 => a.current_bid,
            Some(a) => a.start_bid,
            None => 0,
        }
    }

    /// Auction to bid on. Falls back to the product id when the backend omits
    /// the nested auction id.
    pub fn auction_id(&self) -> i64 {
        self.auction
            .as_ref()
            .and_then(|a| a.auction_id)
            .unwrap_or(self.product_id)
    }

    pub fn is_open(&self) -> bool {
        self.auction
            .as_ref()
            .is_none_or(|a| a.status == AuctionStatus::InProgress)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSimpleInfo {
    #[serde(alias = "id")]
    pub product_id: i64,
    pub name: String,
    #[serde(alias = "image", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub current_bid: Option<i64>,
    pub end_at: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    #[default]
    RegisteredAtDesc,
    EndAt,
    CurrentBid,
}

impl SortBy {
    pub const ALL: [Self; 3] = [Self::RegisteredAtDesc, Self::EndAt, Self::CurrentBid];

    pub fn label(self) -> &'static str {
        match self {
            Self::RegisteredAtDesc => "Newest",
            Self::EndAt => "Ending soon",
            Self::CurrentBid => "Current bid",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegisteredAtDesc => "REGISTERED_AT_DESC",
            Self::EndAt => "END_AT",
            Self::CurrentBid => "CURRENT_BID",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at_from: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default = "Vec::new")]
    pub contents: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Form fields for a new listing; the image travels as a separate file part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRegisterRequest {
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub start_bid: i64,
    /// ISO-8601 UTC timestamp.
    pub end_at: String,
}

impl ProductRegisterRequest {
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_owned(), self.name.clone()),
            ("description".to_owned(), self.description.clone()),
            ("categoryId".to_owned(), self.category_id.to_string()),
            ("startBid".to_owned(), self.start_bid.to_string()),
            ("endAt".to_owned(), self.end_at.clone()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionBidRequest {
    pub bidding_price: i64,
}

/// The four "my products" listings on the member page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MyProductsKind {
    #[default]
    Selling,
    Sold,
    Bidding,
    Purchased,
}

impl MyProductsKind {
    pub const ALL: [Self; 4] = [Self::Selling, Self::Sold, Self::Bidding, Self::Purchased];

    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Selling => "selling",
            Self::Sold => "sold",
            Self::Bidding => "bidding",
            Self::Purchased => "purchased",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Selling => "Selling",
            Self::Sold => "Sold",
            Self::Bidding => "Bidding",
            Self::Purchased => "Purchased",
        }
    }
}

// =============================================================
// Notifications and rankings
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Trade,
    Bid,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Trade => "Trade",
            Self::Bid => "Bid",
            Self::Other => "Notice",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetail {
    pub notification_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub notified_at: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UnreadNotifications {
    #[serde(default)]
    pub notifications: Vec<NotificationDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotKeyword {
    pub keyword: String,
    pub rank_no: Option<u32>,
}
