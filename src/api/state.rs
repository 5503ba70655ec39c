//! Application state shared by the HTTP handlers.

use std::sync::Arc;

use crate::config::BasicAuthSettings;
use crate::infra::Database;

#[derive(Clone)]
pub struct AppState {
    /// Pooled connection, pinged by `/health`
    pub database: Arc<Database>,
    pub basic_auth: Arc<BasicAuthSettings>,
}

impl AppState {
    pub fn new(database: Database, basic_auth: BasicAuthSettings) -> Self {
        Self {
            database: Arc::new(database),
            basic_auth: Arc::new(basic_auth),
        }
    }
}
