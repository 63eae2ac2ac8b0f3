use super::{types::Config, ConfigError, SessionMode};

/// Validate configuration
/// Currently validates:
/// - Session section exists (enforced by serde)
/// - Server port is not 0
/// - Flag mode names a header
/// - Login path is absolute
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.session.mode == SessionMode::Flag && config.session.header.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "session.header cannot be empty in flag mode".to_string(),
        ));
    }

    if !config.session.login_path.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "session.login_path must start with '/': {}",
            config.session.login_path
        )));
    }

    Ok(())
}
