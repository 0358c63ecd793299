//! Route handlers, one module per resource.
//!
//! Each handler issues its storage calls in sequence and maps the outcome to
//! exactly one response: the success shape or an `ApiError`.

pub mod cohorts;
pub mod students;

use db::DbPool;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
