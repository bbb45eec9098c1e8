use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        filter::FilterCondition,
        pagination::{Page, PageQuery},
    },
    user::{
        entities::User,
        value_objects::{CreateUserInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn list_users(&self, query: PageQuery)
    -> impl Future<Output = Result<Page<User>, CoreError>> + Send;

    fn get_user(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Count and fetch one page of users matching the given conditions.
    fn list(
        &self,
        query: PageQuery,
        conditions: Vec<FilterCondition>,
    ) -> impl Future<Output = Result<(Vec<User>, u64), CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
