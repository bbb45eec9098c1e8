use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "sku is required"))]
    pub sku: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "price_cents must not be negative"))]
    pub price_cents: i64,

    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,

    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "price_cents must not be negative"))]
    pub price_cents: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i32>,

    #[serde(default)]
    pub status: Option<String>,
}
