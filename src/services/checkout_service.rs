use crate::{
    cart::{Cart, DiscountTable},
    dto::checkout::{CheckoutRequest, CheckoutResponse},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

/// Runs one checkout: validates the request against the catalog and the
/// configured quantity bound, drives a fresh cart through it, and returns
/// the receipt. The cart never outlives this call.
pub fn checkout(
    state: &AppState,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<CheckoutResponse>> {
    let mut cart = Cart::new(DiscountTable::builtin());

    for item in &payload.items {
        if item.quantity < 0 {
            return Err(AppError::BadRequest(format!(
                "quantity for {} must not be negative",
                item.product
            )));
        }
        if item.quantity > state.max_line_quantity {
            return Err(AppError::BadRequest(format!(
                "quantity for {} exceeds the limit of {}",
                item.product, state.max_line_quantity
            )));
        }
        let product = state
            .catalog
            .get(&item.product)
            .ok_or_else(|| AppError::BadRequest(format!("product not found: {}", item.product)))?;
        cart.add_product(product, item.quantity);
    }

    let discount_percent = cart.apply_discount_code(&payload.discount_code);
    let invalid_code = !payload.discount_code.is_empty() && discount_percent == 0;
    if invalid_code {
        tracing::warn!(code = %payload.discount_code, "invalid discount code");
    }

    let receipt = cart.generate_receipt();
    let receipt_text = receipt.to_text();

    tracing::info!(
        lines = receipt.lines.len(),
        subtotal = receipt.subtotal,
        total = receipt.total,
        discount_percent,
        "checkout complete"
    );

    Ok(ApiResponse::success(
        "Checkout complete",
        CheckoutResponse {
            receipt,
            receipt_text,
            discount_percent,
            invalid_code,
        },
    ))
}
