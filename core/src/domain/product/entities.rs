use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::filter::FilterSchema;
use crate::domain::common::generate_timestamp;

/// Columns a client may filter or sort products by.
pub const PRODUCT_FILTER_SCHEMA: FilterSchema = FilterSchema::new(
    "products",
    &[
        "id",
        "name",
        "sku",
        "status",
        "price_cents",
        "stock",
        "created_at",
        "updated_at",
    ],
    "created_at",
    "id",
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: String,
        sku: String,
        description: Option<String>,
        price_cents: i64,
        stock: i32,
        status: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            sku,
            description,
            price_cents,
            stock,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        price_cents: Option<i64>,
        stock: Option<i32>,
        status: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(price_cents) = price_cents {
            self.price_cents = price_cents;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}
