use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::ProductList,
        checkout::{CheckoutItem, CheckoutRequest, CheckoutResponse},
    },
    models::{Product, Receipt, ReceiptDiscount, ReceiptLine},
    response::ApiResponse,
    routes::{catalog, checkout, health},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_catalog,
        checkout::checkout,
    ),
    components(
        schemas(
            Product,
            Receipt,
            ReceiptLine,
            ReceiptDiscount,
            ProductList,
            CheckoutItem,
            CheckoutRequest,
            CheckoutResponse,
            ApiResponse<ProductList>,
            ApiResponse<CheckoutResponse>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Catalog endpoints"),
        (name = "Checkout", description = "Checkout endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
