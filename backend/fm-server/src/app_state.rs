use fm_auth::RequestAuthorizer;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-process state handed to every handler.
///
/// Both members are constructed once in `main`; nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub authorizer: Arc<RequestAuthorizer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, authorizer: Arc<RequestAuthorizer>) -> Self {
        Self { pool, authorizer }
    }
}
