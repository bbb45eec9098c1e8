use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        filter::parse_filters,
        pagination::{Page, PageQuery},
        services::Service,
    },
    product::{
        entities::{PRODUCT_FILTER_SCHEMA, Product},
        ports::{ProductRepository, ProductService},
        value_objects::{CreateProductInput, UpdateProductInput},
    },
    user::ports::UserRepository,
};

impl<U, P> ProductService for Service<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    async fn list_products(&self, query: PageQuery) -> Result<Page<Product>, CoreError> {
        let conditions =
            parse_filters(&query.filters, &PRODUCT_FILTER_SCHEMA, self.filter_policy)?;
        let (products, total) = self
            .product_repository
            .list(query.clone(), conditions)
            .await?;

        let sort_by = PRODUCT_FILTER_SCHEMA.resolve_sort(&query.sort_by);
        Ok(Page::new(products, total, &query, sort_by))
    }

    async fn get_product(&self, product_id: Uuid) -> Result<Product, CoreError> {
        self.product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_product(&self, input: CreateProductInput) -> Result<Product, CoreError> {
        if self
            .product_repository
            .get_by_sku(input.sku.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "sku '{}' already exists",
                input.sku
            )));
        }

        let product = Product::new(
            input.name,
            input.sku,
            input.description,
            input.price_cents,
            input.stock,
            input.status.unwrap_or_else(|| "draft".to_string()),
        );

        self.product_repository.create(product).await
    }

    async fn update_product(&self, input: UpdateProductInput) -> Result<Product, CoreError> {
        let mut product = self
            .product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        product.update(
            input.name,
            input.description,
            input.price_cents,
            input.stock,
            input.status,
        );

        self.product_repository.update(product).await
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), CoreError> {
        self.product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository.delete(product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::filter::{FilterOperator, FilterPolicy, FilterValue};
    use crate::domain::product::ports::MockProductRepository;
    use crate::domain::user::ports::MockUserRepository;
    use serde_json::json;

    fn service(
        products: MockProductRepository,
        policy: FilterPolicy,
    ) -> Service<MockUserRepository, MockProductRepository> {
        Service::new(MockUserRepository::new(), products, policy)
    }

    #[tokio::test]
    async fn list_products_forwards_range_conditions() {
        let mut products = MockProductRepository::new();
        products
            .expect_list()
            .withf(|_, conditions| {
                conditions.len() == 1
                    && conditions[0].field == "products.price_cents"
                    && conditions[0].operator == FilterOperator::Between
                    && matches!(conditions[0].value, FilterValue::Range(_, _))
            })
            .returning(|_, _| Box::pin(async { Ok((Vec::new(), 0)) }));

        let service = service(products, FilterPolicy::Lenient);

        let filters = match json!({"price_cents": {"operator": "between", "value": [1000, 5000]}}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let query = PageQuery::new(None, None, None, None, filters);

        let page = service.list_products(query).await.unwrap();
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.pages, 0);
    }

    #[tokio::test]
    async fn create_product_rejects_duplicate_sku() {
        let mut products = MockProductRepository::new();
        products.expect_get_by_sku().returning(|sku| {
            Box::pin(async move {
                Ok(Some(Product::new(
                    "Existing".to_string(),
                    sku,
                    None,
                    1000,
                    5,
                    "active".to_string(),
                )))
            })
        });

        let service = service(products, FilterPolicy::Lenient);
        let err = service
            .create_product(CreateProductInput {
                name: "New".to_string(),
                sku: "SKU-1".to_string(),
                description: None,
                price_cents: 2000,
                stock: 3,
                status: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }
}
