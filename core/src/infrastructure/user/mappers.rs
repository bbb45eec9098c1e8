use chrono::{TimeZone, Utc};

use crate::domain::user::entities::User;
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            status: model.status,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        User {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            status: model.status.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
