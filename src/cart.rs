use std::sync::Arc;

use crate::models::{Product, Receipt, ReceiptDiscount, ReceiptLine};

/// The built-in discount codes: normalized (uppercase) code to percent off.
const DISCOUNT_CODES: &[(&str, u32)] = &[("SAVE10", 10), ("SAVE20", 20), ("FREESHIP", 5)];

/// Closed mapping from discount code to percentage. Lookups are
/// case-insensitive and a miss resolves to 0 rather than an error.
#[derive(Debug, Clone)]
pub struct DiscountTable {
    codes: Vec<(String, u32)>,
}

impl DiscountTable {
    pub fn builtin() -> Self {
        Self {
            codes: DISCOUNT_CODES
                .iter()
                .map(|(code, percent)| (code.to_string(), *percent))
                .collect(),
        }
    }

    pub fn resolve(&self, code: &str) -> u32 {
        let normalized = code.to_uppercase();
        self.codes
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(_, percent)| *percent)
            .unwrap_or(0)
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One (product, quantity) selection. Quantity is always > 0 for stored lines.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub quantity: i64,
}

/// A single checkout's cart: ordered lines, the active discount percent,
/// and the code table it resolves against. Built fresh per checkout and
/// discarded once the receipt is out.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount_percent: u32,
    codes: DiscountTable,
}

impl Cart {
    pub fn new(codes: DiscountTable) -> Self {
        Self {
            lines: Vec::new(),
            discount_percent: 0,
            codes,
        }
    }

    /// Appends a line. Quantities <= 0 are dropped, not recorded.
    pub fn add_product(&mut self, product: Arc<Product>, quantity: i64) {
        if quantity > 0 {
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Resolves `code` against the table (case-insensitive), stores the
    /// result as the cart's discount, and returns it. Unknown or empty
    /// codes resolve to 0; there is no error path.
    pub fn apply_discount_code(&mut self, code: &str) -> u32 {
        self.discount_percent = self.codes.resolve(code);
        self.discount_percent
    }

    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact sum of unit price times quantity, in cents.
    pub fn subtotal(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.product.unit_price * line.quantity)
            .sum()
    }

    /// Discount in cents, rounded half-up to a whole cent. This is the
    /// only rounding point; subtotal and total stay exact.
    pub fn discount_amount(&self) -> i64 {
        (self.subtotal() * self.discount_percent as i64 + 50) / 100
    }

    pub fn total(&self) -> i64 {
        self.subtotal() - self.discount_amount()
    }

    /// Snapshot of the cart as a receipt, in line insertion order.
    /// Pure over the cart's state: repeated calls yield identical output.
    pub fn generate_receipt(&self) -> Receipt {
        let lines = self
            .lines
            .iter()
            .map(|line| ReceiptLine {
                name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: line.product.unit_price,
                line_total: line.product.unit_price * line.quantity,
            })
            .collect();

        let discount = if self.discount_percent > 0 {
            Some(ReceiptDiscount {
                percent: self.discount_percent,
                amount: self.discount_amount(),
            })
        } else {
            None
        };

        Receipt {
            lines,
            subtotal: self.subtotal(),
            discount,
            total: self.total(),
        }
    }
}
