//! # Repository Module
//!
//! Database repository implementations for the Lumberyard catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean    │
//! │  API.                                                               │
//! │                                                                     │
//! │  HTTP Handler                                                       │
//! │       │                                                             │
//! │       │  db.products().list(&filter)                                │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── list(&self, filter)                                            │
//! │  ├── get_by_id(&self, id)                                           │
//! │  ├── insert(&self, product)                                         │
//! │  └── update(&self, product)                                         │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Easy to test against an in-memory database                       │
//! │  • Handlers stay thin                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`category::CategoryRepository`] - Category CRUD
//! - [`product::ProductRepository`] - Product CRUD with slug/wood-type filters
//! - [`order::OrderSnapshotRepository`] - Write-once order snapshots

pub mod category;
pub mod order;
pub mod product;
