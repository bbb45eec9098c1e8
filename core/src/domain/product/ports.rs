use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        filter::FilterCondition,
        pagination::{Page, PageQuery},
    },
    product::{
        entities::Product,
        value_objects::{CreateProductInput, UpdateProductInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn list_products(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<Page<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn create_product(
        &self,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Count and fetch one page of products matching the given conditions.
    fn list(
        &self,
        query: PageQuery,
        conditions: Vec<FilterCondition>,
    ) -> impl Future<Output = Result<(Vec<Product>, u64), CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_by_sku(
        &self,
        sku: String,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn create(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete(&self, product_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
