use axum::extract::{Path, State};
use shopkit_core::domain::user::entities::User;
use shopkit_core::domain::user::ports::UserService;
use shopkit_core::domain::user::value_objects::UpdateUserInput;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateUserValidator;

#[utoipa::path(
    put,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = User)
    )
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(UpdateUserInput {
            user_id,
            username: payload.username,
            email: payload.email,
            status: payload.status,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
