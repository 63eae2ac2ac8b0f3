use async_trait::async_trait;
use thiserror::Error;

use super::types::SessionRequest;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No active session")]
    Missing,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Decides whether a request may reach the call desk.
///
/// Gates only check that a session exists; establishing one is the login
/// flow's job.
#[async_trait]
pub trait SessionGate: Send + Sync {
    async fn check(&self, request: &SessionRequest) -> Result<(), SessionError>;

    /// Name of this gate mode
    fn method_name(&self) -> &'static str;
}
