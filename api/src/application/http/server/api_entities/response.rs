use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Success envelope. The payload is serialized as the whole JSON body.
#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
        }
    }
}

/// Body shared by endpoints that only report an outcome.
#[derive(Debug, Serialize, serde::Deserialize, utoipa::ToSchema, PartialEq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
