use axum::extract::{Path, State};
use shopkit_core::domain::product::entities::Product;
use shopkit_core::domain::product::ports::ProductService;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 200, body = Product)
    )
)]
pub async fn get_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .get_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
