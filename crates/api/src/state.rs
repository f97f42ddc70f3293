use std::sync::Arc;

use stockroom_db::ProductGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the gateway wraps an `Arc` and the config is shared.
#[derive(Clone)]
pub struct AppState {
    /// The persistence gateway every handler calls into.
    pub gateway: ProductGateway,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
