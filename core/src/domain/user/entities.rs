use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::filter::FilterSchema;
use crate::domain::common::generate_timestamp;

/// Columns a client may filter or sort users by.
pub const USER_FILTER_SCHEMA: FilterSchema = FilterSchema::new(
    "users",
    &["id", "username", "email", "status", "created_at", "updated_at"],
    "created_at",
    "id",
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, status: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username,
            email,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        username: Option<String>,
        email: Option<String>,
        status: Option<String>,
    ) {
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}
