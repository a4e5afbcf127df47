use std::sync::Arc;

use crate::models::Product;

/// Immutable product list. Products are shared read-only with every cart
/// line that references them.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// The fixed storefront catalog.
    pub fn demo() -> Self {
        Self::new(vec![
            Product::new("Laptop", 120_000),
            Product::new("Mouse", 2_500),
            Product::new("Keyboard", 5_000),
        ])
    }

    /// Case-insensitive lookup by product name.
    pub fn get(&self, name: &str) -> Option<Arc<Product>> {
        self.products
            .iter()
            .find(|product| product.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }
}
