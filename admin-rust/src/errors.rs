use portfolio_sdk::{ClientError, GatewayError, StoreError};
use thiserror::Error;

/// Failure escaping the management layer. Controllers translate operation
/// failures into UI-visible state instead of returning them; this type only
/// covers the flows that do propagate (login, the joint overview fetch).
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),
}
