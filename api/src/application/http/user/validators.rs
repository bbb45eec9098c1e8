use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}
