use crate::application::http::{product::router::ProductApiDoc, user::router::UserApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopkit API"
    ),
    nest(
        (path = "/users", api = UserApiDoc),
        (path = "/products", api = ProductApiDoc),
    )
)]
pub struct ApiDoc;
