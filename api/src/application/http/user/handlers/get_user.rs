use axum::extract::{Path, State};
use shopkit_core::domain::user::entities::User;
use shopkit_core::domain::user::ports::UserService;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = User)
    )
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
