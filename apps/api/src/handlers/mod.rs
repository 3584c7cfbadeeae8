//! HTTP handlers, one module per REST resource.
//!
//! Handlers follow a common shape:
//! 1. deserialize/validate input,
//! 2. call the matching repository,
//! 3. serialize the domain type straight back out.
//!
//! `PUT` and `PATCH` share the same partial-update handlers: both apply the
//! supplied fields over the stored record and leave the rest untouched.

pub mod category;
pub mod order;
pub mod product;
