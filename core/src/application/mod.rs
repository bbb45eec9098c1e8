use crate::domain::common::{ShopkitConfig, services::Service};
use crate::infrastructure::db::postgres::{Postgres, PostgresConfig};
use crate::infrastructure::product::PostgresProductRepository;
use crate::infrastructure::user::PostgresUserRepository;

pub type ShopkitService = Service<PostgresUserRepository, PostgresProductRepository>;

pub async fn create_service(config: ShopkitConfig) -> Result<ShopkitService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresProductRepository::new(postgres.get_db()),
        config.filter_policy,
    ))
}
