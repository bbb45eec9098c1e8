use chrono::{TimeZone, Utc};

use crate::domain::product::entities::Product;
use crate::entity::products::Model as ProductModel;

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            sku: model.sku,
            description: model.description,
            price_cents: model.price_cents,
            stock: model.stock,
            status: model.status,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<&ProductModel> for Product {
    fn from(model: &ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name.clone(),
            sku: model.sku.clone(),
            description: model.description.clone(),
            price_cents: model.price_cents,
            stock: model.stock,
            status: model.status.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
