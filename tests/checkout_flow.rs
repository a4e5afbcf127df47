use axum_checkout_api::{
    catalog::Catalog,
    dto::checkout::{CheckoutItem, CheckoutRequest},
    error::AppError,
    services::checkout_service,
    state::AppState,
};

fn demo_state() -> AppState {
    AppState::new(Catalog::demo(), 10)
}

fn request(items: Vec<(&str, i64)>, code: &str) -> CheckoutRequest {
    CheckoutRequest {
        items: items
            .into_iter()
            .map(|(product, quantity)| CheckoutItem {
                product: product.into(),
                quantity,
            })
            .collect(),
        discount_code: code.into(),
    }
}

// Flow: laptop and mice without a code, then with SAVE10, then a bogus code.
#[test]
fn checkout_prices_the_demo_cart() {
    let state = demo_state();

    let resp = checkout_service::checkout(&state, request(vec![("Laptop", 1), ("Mouse", 2)], ""))
        .expect("checkout");
    let data = resp.data.unwrap();
    assert_eq!(data.receipt.subtotal, 125_000);
    assert_eq!(data.receipt.total, 125_000);
    assert!(data.receipt.discount.is_none());
    assert!(!data.invalid_code);

    let resp = checkout_service::checkout(
        &state,
        request(vec![("Laptop", 1), ("Mouse", 2)], "SAVE10"),
    )
    .expect("checkout");
    let data = resp.data.unwrap();
    assert_eq!(data.discount_percent, 10);
    assert_eq!(data.receipt.discount.as_ref().unwrap().amount, 12_500);
    assert_eq!(data.receipt.total, 112_500);
    assert!(!data.invalid_code);

    let resp = checkout_service::checkout(
        &state,
        request(vec![("Laptop", 1), ("Mouse", 2)], "BOGUS"),
    )
    .expect("checkout");
    let data = resp.data.unwrap();
    assert!(data.invalid_code);
    assert_eq!(data.discount_percent, 0);
    assert_eq!(data.receipt.total, 125_000);
}

#[test]
fn product_names_match_case_insensitively() {
    let state = demo_state();
    let resp = checkout_service::checkout(&state, request(vec![("laptop", 1)], ""))
        .expect("checkout");
    let data = resp.data.unwrap();
    assert_eq!(data.receipt.lines[0].name, "Laptop");
    assert_eq!(data.receipt.subtotal, 120_000);
}

#[test]
fn zero_quantity_items_produce_no_lines() {
    let state = demo_state();
    let resp = checkout_service::checkout(
        &state,
        request(vec![("Laptop", 1), ("Keyboard", 0)], ""),
    )
    .expect("checkout");
    let data = resp.data.unwrap();
    assert_eq!(data.receipt.lines.len(), 1);
    assert_eq!(data.receipt.subtotal, 120_000);
}

#[test]
fn all_zero_cart_returns_the_degenerate_receipt() {
    let state = demo_state();
    let resp = checkout_service::checkout(
        &state,
        request(vec![("Laptop", 0), ("Mouse", 0), ("Keyboard", 0)], "SAVE20"),
    )
    .expect("checkout");
    let data = resp.data.unwrap();
    assert!(data.receipt.lines.is_empty());
    assert_eq!(data.receipt.subtotal, 0);
    assert_eq!(data.receipt.total, 0);
}

#[test]
fn unknown_product_is_rejected() {
    let state = demo_state();
    let err = checkout_service::checkout(&state, request(vec![("Monitor", 1)], ""))
        .expect_err("unknown product");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn quantities_outside_the_bound_are_rejected() {
    let state = demo_state();

    let err = checkout_service::checkout(&state, request(vec![("Mouse", 11)], ""))
        .expect_err("over limit");
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = checkout_service::checkout(&state, request(vec![("Mouse", -1)], ""))
        .expect_err("negative");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn configured_bound_is_respected() {
    let state = AppState::new(Catalog::demo(), 3);
    let resp = checkout_service::checkout(&state, request(vec![("Mouse", 3)], ""));
    assert!(resp.is_ok());

    let err = checkout_service::checkout(&state, request(vec![("Mouse", 4)], ""))
        .expect_err("over configured limit");
    assert!(matches!(err, AppError::BadRequest(_)));
}
