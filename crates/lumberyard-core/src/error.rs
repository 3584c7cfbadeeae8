//! # Error Types
//!
//! Typed validation errors for lumberyard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  lumberyard-core errors (this file)                                 │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  lumberyard-db errors (separate crate)                              │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  API errors (apps/api)                                              │
//! │  └── ApiError         - What HTTP clients see (JSON, 4xx/5xx)       │
//! │                                                                     │
//! │  Flow: ValidationError → ApiError → structured 400 response         │
//! │        DbError         → ApiError → 404 / 409 / 400 / 500           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These occur when client input doesn't meet field-level requirements.
/// The API layer turns them into structured 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A field exceeds its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A field doesn't match the expected format.
    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A numeric field is out of its allowed range.
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: String, reason: String },
}
