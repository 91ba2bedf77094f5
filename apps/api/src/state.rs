use std::sync::Arc;

use crate::assessment::catalog::Catalog;
use crate::assessment::store::SessionStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The validated question catalog. Immutable for the process lifetime.
    pub catalog: Arc<Catalog>,
    /// Live assessment sessions. In-memory only; nothing survives a restart.
    pub sessions: SessionStore,
}
