use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::catalog::ProductList,
    error::AppResult,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_catalog))
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "List catalog products", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn list_catalog(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = state
        .catalog
        .products()
        .iter()
        .map(|product| (**product).clone())
        .collect();

    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Catalog", data)))
}
