mod flag;
mod open;
mod traits;
mod types;

pub use flag::*;
pub use open::*;
pub use traits::*;
pub use types::*;

use crate::config::SessionConfig;

/// Factory function to create the session gate from config
pub fn create_session_gate(config: &SessionConfig) -> Result<Box<dyn SessionGate>, SessionError> {
    use crate::config::SessionMode;

    match config.mode {
        SessionMode::None => Ok(Box::new(OpenGate::new())),
        SessionMode::Flag => {
            if config.header.trim().is_empty() {
                return Err(SessionError::ConfigurationError(
                    "session.header must be set when using flag mode".to_string(),
                ));
            }
            Ok(Box::new(FlagGate::new(config.header.clone())))
        }
    }
}
