use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use shopkit_core::domain::user::ports::UserService;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteUserResponse {
    pub user_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "user",
    summary = "Delete user",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = DeleteUserResponse)
    )
)]
pub async fn delete_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteUserResponse>, ApiError> {
    state
        .service
        .delete_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteUserResponse { user_id }))
}
