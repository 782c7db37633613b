//! HTTP error mapping. Every failure leaves as `{"detail": ...}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use fastzero_core::error::{ClientCode, FastZeroError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] FastZeroError),

    /// Request could not be extracted (bad path id, bad or missing body).
    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                FastZeroError::NotFound => StatusCode::NOT_FOUND,
                FastZeroError::DuplicateUsername | FastZeroError::DuplicateEmail => {
                    StatusCode::BAD_REQUEST
                }
                FastZeroError::UsernameOrEmailConflict => StatusCode::CONFLICT,
                FastZeroError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
                FastZeroError::Config(_)
                | FastZeroError::UnsupportedVersion
                | FastZeroError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn client_code(&self) -> ClientCode {
        match self {
            ApiError::Core(e) => e.client_code(),
            ApiError::Unprocessable(_) => ClientCode::Unprocessable,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Core(
                FastZeroError::Config(_)
                | FastZeroError::UnsupportedVersion
                | FastZeroError::Internal(_),
            ) => "Internal Server Error".to_owned(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.client_code().as_str();
        if status.is_server_error() {
            tracing::error!(code, err = %self, "request failed");
        } else {
            tracing::debug!(code, status = status.as_u16(), err = %self, "request rejected");
        }
        let body = Json(json!({ "detail": self.detail() }));
        (status, body).into_response()
    }
}
