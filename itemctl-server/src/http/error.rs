//! API error type with IntoResponse
//!
//! Every error body has the shape `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Detail returned for unknown item ids
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body, query or path failed to deserialize (422)
    Validation { message: String },

    /// No item with this id (404)
    NotFound { id: i64 },

    /// Storage failure (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Validation { message } => message,
            Self::NotFound { id } => {
                tracing::debug!(id, "item not found");
                ITEM_NOT_FOUND.to_owned()
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "database error");
                "Internal Server Error".to_owned()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id: id.into() },
            _ => Self::Database(e),
        }
    }
}
