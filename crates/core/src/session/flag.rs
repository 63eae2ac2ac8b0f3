//! Session-flag presence check.

use async_trait::async_trait;

use super::{SessionError, SessionGate, SessionRequest};

/// Gate that requires a non-empty session flag header.
///
/// The flag's value is not interpreted: whoever set it (the login flow)
/// owns its meaning.
pub struct FlagGate {
    header: String,
}

impl FlagGate {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into().to_lowercase(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

#[async_trait]
impl SessionGate for FlagGate {
    async fn check(&self, request: &SessionRequest) -> Result<(), SessionError> {
        match request.header(&self.header) {
            Some(value) if !value.trim().is_empty() => Ok(()),
            _ => Err(SessionError::Missing),
        }
    }

    fn method_name(&self) -> &'static str {
        "flag"
    }
}
