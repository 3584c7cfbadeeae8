//! # lumberyard-core: Pure Domain Types for the Lumberyard Catalog
//!
//! This crate is the foundation of the Lumberyard backend. It contains the
//! domain model and wire-format rules as pure types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Lumberyard Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────┐     │
//! │  │                  apps/api (actix-web)                     │     │
//! │  │    /api/categories/  /api/products/  /api/orders/         │     │
//! │  └─────────────────────────────┬─────────────────────────────┘     │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────┐     │
//! │  │               ★ lumberyard-core (THIS CRATE) ★            │     │
//! │  │                                                           │     │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐           │     │
//! │  │   │   types   │  │   money   │  │ validation │           │     │
//! │  │   │ Category  │  │   Money   │  │   slug,    │           │     │
//! │  │   │  Product  │  │  "12.50"  │  │ name, price│           │     │
//! │  │   │ WoodType  │  │  ⇄ cents  │  │   checks   │           │     │
//! │  │   └───────────┘  └───────────┘  └────────────┘           │     │
//! │  │                                                           │     │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS      │     │
//! │  └─────────────────────────────┬─────────────────────────────┘     │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────┐     │
//! │  │              lumberyard-db (Database Layer)               │     │
//! │  │        SQLite queries, migrations, repositories           │     │
//! │  └───────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Category, Product, WoodType, OrderSnapshot)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Typed validation errors
//! - [`validation`] - Field-level input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are stored in cents (i64); the wire
//!    format is a two-decimal string (`"12.50"`) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lumberyard_core::Money` instead of
// `use lumberyard_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default unit of sale for products when none is supplied.
///
/// Lumber is priced per board foot unless a product says otherwise
/// (slabs, live edge pieces, etc. may be priced per piece).
pub const DEFAULT_UNIT: &str = "per board foot";

/// Default currency code for order snapshots.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Maximum slug length accepted on input.
///
/// Slugs are URL path segments; anything longer than this is almost
/// certainly a mistake and would produce unwieldy URLs.
pub const MAX_SLUG_LENGTH: usize = 100;

/// Maximum product/category name length accepted on input.
pub const MAX_NAME_LENGTH: usize = 200;
