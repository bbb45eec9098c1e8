use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        filter::parse_filters,
        pagination::{Page, PageQuery},
        services::Service,
    },
    product::ports::ProductRepository,
    user::{
        entities::{USER_FILTER_SCHEMA, User},
        ports::{UserRepository, UserService},
        value_objects::{CreateUserInput, UpdateUserInput},
    },
};

impl<U, P> UserService for Service<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    async fn list_users(&self, query: PageQuery) -> Result<Page<User>, CoreError> {
        let conditions = parse_filters(&query.filters, &USER_FILTER_SCHEMA, self.filter_policy)?;
        let (users, total) = self
            .user_repository
            .list(query.clone(), conditions)
            .await?;

        let sort_by = USER_FILTER_SCHEMA.resolve_sort(&query.sort_by);
        Ok(Page::new(users, total, &query, sort_by))
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        if self
            .user_repository
            .get_by_username(input.username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "username '{}' is already taken",
                input.username
            )));
        }
        if self
            .user_repository
            .get_by_email(input.email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "email '{}' is already registered",
                input.email
            )));
        }

        let user = User::new(
            input.username,
            input.email,
            input.status.unwrap_or_else(|| "active".to_string()),
        );

        self.user_repository.create(user).await
    }

    async fn update_user(&self, input: UpdateUserInput) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        user.update(input.username, input.email, input.status);

        self.user_repository.update(user).await
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.user_repository.delete(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::filter::{FilterPolicy, FilterScalar, FilterValue};
    use crate::domain::common::pagination::SortOrder;
    use crate::domain::product::ports::MockProductRepository;
    use crate::domain::user::ports::MockUserRepository;
    use serde_json::json;

    fn service(
        users: MockUserRepository,
        policy: FilterPolicy,
    ) -> Service<MockUserRepository, MockProductRepository> {
        Service::new(users, MockProductRepository::new(), policy)
    }

    fn sample_users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| {
                User::new(
                    format!("user{i}"),
                    format!("user{i}@example.com"),
                    "active".to_string(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn list_users_parses_filters_and_computes_meta() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .withf(|query, conditions| {
                query.page == 2
                    && conditions.len() == 1
                    && conditions[0].field == "users.status"
                    && conditions[0].value
                        == FilterValue::Scalar(FilterScalar::String("active".to_string()))
            })
            .returning(|_, _| Box::pin(async { Ok((sample_users(5), 41)) }));

        let service = service(users, FilterPolicy::Lenient);

        let filters = match json!({"status": "active"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let query = PageQuery::new(Some(2), Some(20), None, None, filters);

        let page = service.list_users(query).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.meta.total, 41);
        assert_eq!(page.meta.pages, 3);
        assert_eq!(page.meta.sort_by, "created_at");
        assert_eq!(page.meta.sort_order, SortOrder::Desc);
    }

    #[tokio::test]
    async fn list_users_echoes_allow_listed_sort() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .returning(|_, _| Box::pin(async { Ok((Vec::new(), 0)) }));

        let service = service(users, FilterPolicy::Lenient);
        let query = PageQuery::new(
            None,
            None,
            Some("username".to_string()),
            Some(SortOrder::Asc),
            Default::default(),
        );

        let page = service.list_users(query).await.unwrap();
        assert_eq!(page.meta.sort_by, "username");
        assert_eq!(page.meta.pages, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn list_users_rejects_unknown_field_when_strict() {
        let users = MockUserRepository::new();
        let service = service(users, FilterPolicy::Strict);

        let filters = match json!({"password_hash": "x"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let query = PageQuery::new(None, None, None, None, filters);

        let err = service.list_users(query).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilter(_)));
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_username() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_username().returning(|username| {
            Box::pin(async move {
                Ok(Some(User::new(
                    username,
                    "taken@example.com".to_string(),
                    "active".to_string(),
                )))
            })
        });

        let service = service(users, FilterPolicy::Lenient);
        let err = service
            .create_user(CreateUserInput {
                username: "john".to_string(),
                email: "john@example.com".to_string(),
                status: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn get_user_maps_missing_row_to_not_found() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(users, FilterPolicy::Lenient);
        let err = service.get_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound));
    }
}
