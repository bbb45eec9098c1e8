use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping every 2xx payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseBody<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let (status, data) = match self {
            Response::OK(data) => (StatusCode::OK, data),
            Response::Created(data) => (StatusCode::CREATED, data),
        };

        let body = ResponseBody {
            code: 0,
            message: "success".to_string(),
            data,
        };

        (status, Json(body)).into_response()
    }
}
