//! # Validation Module
//!
//! Field-level input validation for the catalog API.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Deserialization (serde)                                   │
//! │  ├── Type checks (string vs number)                                 │
//! │  └── Enum membership (wood_type)                                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  └── Field format and range rules                                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── UNIQUE constraints (slugs, order reference)                    │
//! │  └── Foreign key constraints (product → category)                   │
//! │                                                                     │
//! │  Defense in depth: each layer catches different errors              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LENGTH, MAX_SLUG_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a slug (URL-safe business key).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
/// - May contain only letters, digits, hyphens, and underscores
///
/// ## Example
/// ```rust
/// use lumberyard_core::validation::validate_slug;
///
/// assert!(validate_slug("domestic-hardwoods").is_ok());
/// assert!(validate_slug("").is_err());
/// assert!(validate_slug("oak boards").is_err());
/// ```
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    let slug = slug.trim();

    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: "slug".to_string(),
        });
    }

    if slug.len() > MAX_SLUG_LENGTH {
        return Err(ValidationError::TooLong {
            field: "slug".to_string(),
            max: MAX_SLUG_LENGTH,
        });
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// Negative prices are rejected; zero is allowed (free samples, offcuts).
pub fn validate_price(price: crate::Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(())
}

/// Validates a currency code.
///
/// The store doesn't maintain a currency table; it only bounds the length
/// the way the storage schema does.
pub fn validate_currency(currency: &str) -> ValidationResult<()> {
    if currency.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if currency.len() > 8 {
        return Err(ValidationError::TooLong {
            field: "currency".to_string(),
            max: 8,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
