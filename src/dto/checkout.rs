use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Receipt;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutItem {
    /// Catalog product name, matched case-insensitively.
    pub product: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    /// Optional discount code, matched case-insensitively.
    #[serde(default)]
    pub discount_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub receipt: Receipt,
    /// Fixed two-decimal text rendering of the receipt.
    pub receipt_text: String,
    pub discount_percent: u32,
    /// True when a non-empty code resolved to no discount. The cart is
    /// still priced; the client decides whether to warn the user.
    pub invalid_code: bool,
}
