use axum::extract::State;
use shopkit_core::domain::user::entities::User;
use shopkit_core::domain::user::ports::UserService;
use shopkit_core::domain::user::value_objects::CreateUserInput;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::CreateUserValidator;

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = User)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .create_user(CreateUserInput {
            username: payload.username,
            email: payload.email,
            status: payload.status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
