use super::handlers::{
    create_user::{__path_create_user, create_user},
    delete_user::{__path_delete_user, delete_user},
    get_user::{__path_get_user, get_user},
    get_users::{__path_get_users, get_users},
    update_user::{__path_update_user, update_user},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, get_user, create_user, update_user, delete_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            get(get_users).post(create_user),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user).put(update_user).delete(delete_user),
        )
}
