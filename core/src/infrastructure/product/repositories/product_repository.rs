use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, filter::FilterCondition, pagination::PageQuery},
    product::{
        entities::{PRODUCT_FILTER_SCHEMA, Product},
        ports::ProductRepository,
    },
};
use crate::entity::products::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity,
};
use crate::infrastructure::query::{apply_filters, apply_sort, fetch_page};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn list(
        &self,
        query: PageQuery,
        conditions: Vec<FilterCondition>,
    ) -> Result<(Vec<Product>, u64), CoreError> {
        let select = apply_filters(ProductEntity::find(), &conditions);
        let select = apply_sort(
            select,
            &PRODUCT_FILTER_SCHEMA,
            &query.sort_by,
            query.sort_order,
        );

        let (models, total) = fetch_page(&self.db, select, &query).await.map_err(|e| {
            error!("Failed to list products: {}", e);
            CoreError::InternalServerError
        })?;

        Ok((models.iter().map(Product::from).collect(), total))
    }

    async fn get_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find()
            .filter(ProductColumn::Id.eq(product_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_by_sku(&self, sku: String) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find()
            .filter(ProductColumn::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by sku: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn create(&self, product: Product) -> Result<Product, CoreError> {
        let created = ProductEntity::insert(ProductActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            sku: Set(product.sku),
            description: Set(product.description),
            price_cents: Set(product.price_cents),
            stock: Set(product.stock),
            status: Set(product.status),
            created_at: Set(product.created_at.naive_utc()),
            updated_at: Set(product.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Product::from)
        .map_err(|e| {
            error!("Failed to create product: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn update(&self, product: Product) -> Result<Product, CoreError> {
        let updated = ProductEntity::update(ProductActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            sku: Set(product.sku),
            description: Set(product.description),
            price_cents: Set(product.price_cents),
            stock: Set(product.stock),
            status: Set(product.status),
            created_at: Set(product.created_at.naive_utc()),
            updated_at: Set(product.updated_at.naive_utc()),
        })
        .filter(ProductColumn::Id.eq(product.id))
        .exec(&self.db)
        .await
        .map(Product::from)
        .map_err(|e| {
            error!("Failed to update product: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete(&self, product_id: Uuid) -> Result<(), CoreError> {
        ProductEntity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
