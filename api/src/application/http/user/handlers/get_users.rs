use axum::extract::State;
use shopkit_core::domain::common::pagination::Page;
use shopkit_core::domain::user::entities::User;
use shopkit_core::domain::user::ports::UserService;

use crate::application::http::query_extractor::PageQueryExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "List users",
    description = "Retrieves users with filtering, sorting, and pagination.",
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page, capped at 100"),
        ("sort_by" = Option<String>, Query, description = "Sort column"),
        ("sort_order" = Option<String>, Query, description = "ASC or DESC"),
        ("filters" = Option<String>, Query, description = "JSON object mapping a column to a scalar (implicit eq) or an {operator, value} pair; also accepted as filters[column] / filters[column][operator] + filters[column][value] bracket pairs"),
    ),
    responses(
        (status = 200, body = Page<User>)
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    PageQueryExtractor(query): PageQueryExtractor,
) -> Result<Response<Page<User>>, ApiError> {
    let page = state
        .service
        .list_users(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
