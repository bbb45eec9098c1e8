use axum::extract::State;
use shopkit_core::domain::product::entities::Product;
use shopkit_core::domain::product::ports::ProductService;
use shopkit_core::domain::product::value_objects::CreateProductInput;

use crate::application::http::product::validators::CreateProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    request_body = CreateProductValidator,
    responses(
        (status = 201, body = Product)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .create_product(CreateProductInput {
            name: payload.name,
            sku: payload.sku,
            description: payload.description,
            price_cents: payload.price_cents,
            stock: payload.stock,
            status: payload.status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(product))
}
