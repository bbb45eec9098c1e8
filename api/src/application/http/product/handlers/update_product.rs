use axum::extract::{Path, State};
use shopkit_core::domain::product::entities::Product;
use shopkit_core::domain::product::ports::ProductService;
use shopkit_core::domain::product::value_objects::UpdateProductInput;
use uuid::Uuid;

use crate::application::http::product::validators::UpdateProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    request_body = UpdateProductValidator,
    responses(
        (status = 200, body = Product)
    )
)]
pub async fn update_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .update_product(UpdateProductInput {
            product_id,
            name: payload.name,
            description: payload.description,
            price_cents: payload.price_cents,
            stock: payload.stock,
            status: payload.status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
