use std::sync::Arc;

use stockroom_db::ProductGateway;

use crate::config::SoapConfig;

/// Shared state for the SOAP handlers.
#[derive(Clone)]
pub struct SoapState {
    pub gateway: ProductGateway,
    pub config: Arc<SoapConfig>,
}
