use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use shopkit_core::domain::product::ports::ProductService;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProductResponse {
    pub product_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 200, body = DeleteProductResponse)
    )
)]
pub async fn delete_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProductResponse>, ApiError> {
    state
        .service
        .delete_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductResponse { product_id }))
}
