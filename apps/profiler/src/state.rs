use std::sync::Arc;

use crate::profile::requester::ProfileSource;
use crate::profile::variants::ProfileVariant;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-run data; each request builds its own values.
#[derive(Clone)]
pub struct AppState {
    /// Where profiles come from. `CompletionClient` in production.
    pub source: Arc<dyn ProfileSource>,
    pub variant: ProfileVariant,
}
