//! HTTP routes

pub mod graphql;
pub mod health;

use axum::Router;

use crate::graphql::AppSchema;
use crate::state::AppState;

/// `/graphql` plus readiness. Liveness and the shared layers are added by
/// `axum_helpers::create_router` in `main`.
pub fn routes(state: &AppState, schema: AppSchema) -> Router {
    Router::new()
        .merge(graphql::router(schema))
        .merge(health::router(state.clone()))
}
