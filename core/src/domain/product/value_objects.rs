use uuid::Uuid;

pub struct CreateProductInput {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub status: Option<String>,
}

pub struct UpdateProductInput {
    pub product_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub status: Option<String>,
}
