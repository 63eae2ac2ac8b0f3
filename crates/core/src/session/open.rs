use async_trait::async_trait;

use super::{SessionError, SessionGate, SessionRequest};

/// Gate that lets every request through.
/// Must be explicitly configured - the system won't default to this
pub struct OpenGate;

impl OpenGate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenGate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionGate for OpenGate {
    async fn check(&self, _request: &SessionRequest) -> Result<(), SessionError> {
        Ok(())
    }

    fn method_name(&self) -> &'static str {
        "none"
    }
}
