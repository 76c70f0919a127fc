use crate::config::Config;
use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Deliberately thin: the store holds no cache and no pool, so cloning
/// per request is a couple of cheap allocations.
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub config: Config,
}
