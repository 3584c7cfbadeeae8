//! Shared application state.

use lumberyard_db::Database;

/// State handed to every handler via `web::Data`.
///
/// The `Database` handle is itself a cheap clone around a connection pool,
/// so handlers just call `state.db.products()` etc.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
