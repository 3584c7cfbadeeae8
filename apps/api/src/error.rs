//! API error types and their HTTP representation.
//!
//! ## Error Mapping
//! ```text
//! ValidationError (core)        → 400 {"error": "..."}
//! DbError::NotFound             → 404 {"error": "..."}
//! DbError::UniqueViolation      → 409 {"error": "..."}
//! DbError::ForeignKeyViolation  → 400 {"error": "..."}
//! DbError::* (infrastructure)   → 500 {"error": "Database operation failed"}
//! ```
//!
//! Invalid *filter* values are not errors at all: the product listing
//! treats them as "matches nothing" and returns an empty set.

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use lumberyard_core::ValidationError;
use lumberyard_db::DbError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed field validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested resource doesn't exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A unique business key (slug, reference) already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request references a nonexistent related resource.
    #[error("Bad request: {0}")]
    BadReference(String),

    /// Server configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database failure not attributable to the request.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{entity} {id} not found"))
            }
            DbError::UniqueViolation { field } => {
                ApiError::Conflict(format!("{field} already exists"))
            }
            DbError::ForeignKeyViolation { .. } => {
                ApiError::BadReference("referenced resource does not exist".to_string())
            }
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        // Log the full error when it's turned into a response
        tracing::error!(api_error = %self, "Responding with error");
        match self {
            ApiError::Validation(m) => HttpResponse::BadRequest().json(json!({ "error": m })),
            ApiError::NotFound(m) => HttpResponse::NotFound().json(json!({ "error": m })),
            ApiError::Conflict(m) => HttpResponse::Conflict().json(json!({ "error": m })),
            ApiError::BadReference(m) => HttpResponse::BadRequest().json(json!({ "error": m })),
            ApiError::Config(m) => HttpResponse::InternalServerError()
                .json(json!({ "error": "Configuration issue", "detail": m })),
            ApiError::Database(_) => HttpResponse::InternalServerError()
                .json(json!({ "error": "Database operation failed" })),
        }
    }
}

/// Result type alias for handlers.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
