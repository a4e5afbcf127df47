use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable product. Prices are in cents to keep the arithmetic exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub name: String,
    /// Unit price in cents.
    pub unit_price: i64,
    /// Optional image reference for the storefront; never affects pricing.
    pub image: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_price: i64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            image: None,
        }
    }
}

/// One line of a finished receipt. Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub line_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReceiptDiscount {
    pub percent: u32,
    pub amount: i64,
}

/// Derived summary of a cart. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: i64,
    /// Present only when a discount percentage is in effect.
    pub discount: Option<ReceiptDiscount>,
    pub total: i64,
}

impl Receipt {
    /// Plain-text rendering with fixed two-decimal dollar amounts.
    pub fn to_text(&self) -> String {
        let mut out = Vec::with_capacity(self.lines.len() + 3);
        for line in &self.lines {
            out.push(format!(
                "{} x{} = ${}",
                line.name,
                line.quantity,
                format_cents(line.line_total)
            ));
        }
        out.push(format!("\nSubtotal: ${}", format_cents(self.subtotal)));
        if let Some(discount) = &self.discount {
            out.push(format!(
                "Discount: {}% (-${})",
                discount.percent,
                format_cents(discount.amount)
            ));
        }
        out.push(format!("Total: ${}", format_cents(self.total)));
        out.join("\n")
    }
}

/// Formats a non-negative cent amount as a two-decimal string, e.g. 125000 -> "1250.00".
pub fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
