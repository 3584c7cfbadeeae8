//! # lumberyard-db: Database Layer for Lumberyard
//!
//! This crate provides database access for the Lumberyard catalog backend.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Lumberyard Data Flow                            │
//! │                                                                     │
//! │  HTTP Handler (list_products)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────┐     │
//! │  │                lumberyard-db (THIS CRATE)                 │     │
//! │  │                                                           │     │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐   │     │
//! │  │   │   Database   │  │ Repositories │  │  Migrations  │   │     │
//! │  │   │  (pool.rs)   │  │ category.rs  │  │  (embedded)  │   │     │
//! │  │   │              │  │ product.rs   │  │              │   │     │
//! │  │   │ SqlitePool   │◄─│ order.rs     │  │ 001_init.sql │   │     │
//! │  │   └──────────────┘  └──────────────┘  └──────────────┘   │     │
//! │  │                                                           │     │
//! │  └───────────────────────────────────────────────────────────┘     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database (./data/lumberyard.db)                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (category, product, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lumberyard_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/db.sqlite")).await?;
//! let products = db.products().list(&ProductFilter::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::order::OrderSnapshotRepository;
pub use repository::product::{ProductFilter, ProductRepository};
