use std::sync::Arc;

use crate::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub max_line_quantity: i64,
}

impl AppState {
    pub fn new(catalog: Catalog, max_line_quantity: i64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            max_line_quantity,
        }
    }
}
