pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /health                 service and store health
/// /products               list (GET), create (POST)
/// /products/{id}          get (GET), update (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
}
