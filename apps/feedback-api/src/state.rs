//! Application state management.

use mongodb::Client;

/// Shared application state, built once in `main`.
///
/// Cloning is cheap; the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
}
