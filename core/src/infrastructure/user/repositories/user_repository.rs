use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, filter::FilterCondition, pagination::PageQuery},
    user::{
        entities::{USER_FILTER_SCHEMA, User},
        ports::UserRepository,
    },
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::query::{apply_filters, apply_sort, fetch_page};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn list(
        &self,
        query: PageQuery,
        conditions: Vec<FilterCondition>,
    ) -> Result<(Vec<User>, u64), CoreError> {
        let select = apply_filters(UserEntity::find(), &conditions);
        let select = apply_sort(select, &USER_FILTER_SCHEMA, &query.sort_by, query.sort_order);

        let (models, total) = fetch_page(&self.db, select, &query).await.map_err(|e| {
            error!("Failed to list users: {}", e);
            CoreError::InternalServerError
        })?;

        Ok((models.iter().map(User::from).collect(), total))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Id.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by username: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        let created = UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            status: Set(user.status),
            created_at: Set(user.created_at.naive_utc()),
            updated_at: Set(user.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(User::from)
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn update(&self, user: User) -> Result<User, CoreError> {
        let updated = UserEntity::update(UserActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            status: Set(user.status),
            created_at: Set(user.created_at.naive_utc()),
            updated_at: Set(user.updated_at.naive_utc()),
        })
        .filter(UserColumn::Id.eq(user.id))
        .exec(&self.db)
        .await
        .map(User::from)
        .map_err(|e| {
            error!("Failed to update user: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), CoreError> {
        UserEntity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
