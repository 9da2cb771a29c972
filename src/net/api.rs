//! REST endpoints of the marketplace backend.
//!
//! Every helper here is a thin call through [`ApiClient`], so credential
//! attachment and 401 handling come for free. Responses are the bare payload;
//! no endpoint is unwrapped from a `{data: ...}` envelope.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::pipeline::{ApiClient, FilePart, Transport};
use super::types::{
    AuctionBidRequest, Category, CreditChargeRequest, CreditChargeResponse, CreditResponse, HotKeyword, LoginRequest,
    LoginResponse, MyProductsKind, Page, Product, ProductRegisterRequest, ProductSimpleInfo, SearchProductRequest,
    SignupRequest, UnreadNotifications,
};

pub const SIGNUP_PATH: &str = "/main/api/v1/members/signup";
pub const LOGIN_PATH: &str = "/main/api/v1/members/login";
pub const CREDIT_PATH: &str = "/main/api/v1/members/me/credit";
pub const CREDIT_CHARGE_PATH: &str = "/main/api/v1/members/me/credit/charge";
pub const NOTIFICATIONS_PATH: &str = "/main/api/v1/notifications/me";
pub const HOT_KEYWORDS_PATH: &str = "/main/api/v1/rankings/search-keywords";
pub const PRODUCT_SEARCH_PATH: &str = "/api/v1/products/search";
pub const PRODUCTS_PATH: &str = "/api/v1/products";
pub const CATEGORIES_PATH: &str = "/api/v1/categories";

fn product_path(product_id: i64) -> String {
    format!("/api/v1/products/{product_id}")
}

fn product_simple_info_path(product_id: i64) -> String {
    format!("/api/v1/products/{product_id}/simple-info")
}

fn my_products_path(kind: MyProductsKind, page: u32, size: u32) -> String {
    format!("/api/v1/products/{}/me?page={page}&size={size}", kind.path_segment())
}

fn bid_path(auction_id: i64) -> String {
    format!("/auction/api/v1/auctions/{auction_id}/bid")
}

impl<T: Transport> ApiClient<T> {
    // =============================================================
    // Members
    // =============================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.post_json_unit(SIGNUP_PATH, request).await
    }

    /// Log in and, on success, persist the issued credential.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors; the session is untouched on failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let response: LoginResponse = self.post_json(LOGIN_PATH, request).await?;
        self.session().establish(&response.access_token);
        Ok(())
    }

    /// Local-only logout; the backend keeps no session to end.
    pub fn logout(&self) {
        self.session().logout();
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn credit(&self) -> Result<CreditResponse, ApiError> {
        self.get_json(CREDIT_PATH).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn charge_credit(&self, amount: i64) -> Result<CreditChargeResponse, ApiError> {
        self.post_json(CREDIT_CHARGE_PATH, &CreditChargeRequest { amount }).await
    }

    // =============================================================
    // Notifications and rankings
    // =============================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn unread_notifications(&self) -> Result<UnreadNotifications, ApiError> {
        self.get_json(NOTIFICATIONS_PATH).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn hot_keywords(&self) -> Result<Vec<HotKeyword>, ApiError> {
        self.get_json(HOT_KEYWORDS_PATH).await
    }

    // =============================================================
    // Products
    // =============================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn search_products(&self, request: &SearchProductRequest) -> Result<Page<ProductSimpleInfo>, ApiError> {
        self.post_json(PRODUCT_SEARCH_PATH, request).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn product(&self, product_id: i64) -> Result<Product, ApiError> {
        self.get_json(&product_path(product_id)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn product_simple_info(&self, product_id: i64) -> Result<ProductSimpleInfo, ApiError> {
        self.get_json(&product_simple_info_path(product_id)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn register_product(&self, request: &ProductRegisterRequest, image: FilePart) -> Result<(), ApiError> {
        self.post_multipart(PRODUCTS_PATH, request.form_fields(), Some(image)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn my_products(
        &self,
        kind: MyProductsKind,
        page: u32,
        size: u32,
    ) -> Result<Page<ProductSimpleInfo>, ApiError> {
        self.get_json(&my_products_path(kind, page, size)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    // =============================================================
    // Auctions
    // =============================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn place_bid(&self, auction_id: i64, bidding_price: i64) -> Result<(), ApiError> {
        self.post_json_unit(&bid_path(auction_id), &AuctionBidRequest { bidding_price }).await
    }
}
