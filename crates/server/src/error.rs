use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{
    errors::INTERNAL_ERROR_MESSAGE, ApplicationError, DomainError, ErrorClass, ErrorResponse,
};
use catalog_db::RepositoryError;
use tracing::{error, warn};

/// A failed request, rendered as an [`ErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApplicationError> for ApiError {
    fn from(value: ApplicationError) -> Self {
        let class = value.class();
        match class {
            ErrorClass::Internal => {
                error!(
                    event_name = "catalog.request.internal_error",
                    error = %value,
                    "request failed"
                );
            }
            ErrorClass::BadRequest | ErrorClass::NotFound => {
                warn!(event_name = "catalog.request.rejected", error = %value, "request rejected");
            }
        }

        let status = StatusCode::from_u16(class.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, message: value.user_message() }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        ApplicationError::from(value).into()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(value: RepositoryError) -> Self {
        ApplicationError::Persistence(value.to_string()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { code: self.status.as_u16(), message: self.message };
        (self.status, Json(body)).into_response()
    }
}
