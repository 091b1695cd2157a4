//! HTTP error mapping
//!
//! Every failure a handler can produce becomes an `ApiError`, which renders
//! as a JSON body with a `detail` field:
//!
//! | Variant | Status | `detail` |
//! |---|---|---|
//! | `NotFound` | 404 | `"Product not found"` |
//! | `Purchase` | 400 | rejection message |
//! | `Validation` | 422 | list of field violations |
//! | `BadRequest` | 422 | single request-level violation |

use crate::catalog::CatalogError;
use crate::purchase::PurchaseError;
use crate::validation::{FieldDetail, ValidationErrors};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    NotFound(#[from] CatalogError),

    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error("Request validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The request could not be read into the expected shape.
    #[error("Malformed {location}: {message}")]
    BadRequest {
        location: &'static str,
        message: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Purchase(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) | ApiError::BadRequest { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            location: "body",
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest {
            location: "path",
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            location: "query",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound(CatalogError::ProductNotFound(_)) => {
                json!({ "detail": "Product not found" })
            }
            ApiError::Purchase(e) => json!({ "detail": e.to_string() }),
            ApiError::Validation(errors) => json!({ "detail": errors.to_detail() }),
            ApiError::BadRequest { location, message } => {
                json!({ "detail": [FieldDetail::request(location, message.as_str())] })
            }
        };

        if status.is_client_error() {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}
