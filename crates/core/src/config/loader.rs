use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `CALLDESK_SERVER_PORT=9000`.
///
/// The first `_` after the prefix separates the section from the key, so
/// `CALLDESK_DESK_SEED_FIXTURES` sets `desk.seed_fixtures`.
pub const ENV_PREFIX: &str = "CALLDESK_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().replacen('_', ".", 1).into()))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionMode;
    use figment::Jail;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[session]
mode = "none"

[server]
port = 9000
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_load_config_from_str_missing_session() {
        let toml = r#"
[server]
port = 8080
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_from_str_unknown_mode() {
        let toml = r#"
[session]
mode = "oauth"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/calldesk.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "calldesk.toml",
                r#"
[session]
mode = "flag"
login_path = "/signin"

[server]
host = "127.0.0.1"
port = 3000

[desk]
seed_fixtures = false
"#,
            )?;

            let config = load_config(Path::new("calldesk.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.session.mode, SessionMode::Flag);
            assert_eq!(config.session.login_path, "/signin");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.server.host.to_string(), "127.0.0.1");
            assert!(!config.desk.seed_fixtures);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_multi_word_keys() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "calldesk.toml",
                r#"
[session]
mode = "none"
"#,
            )?;
            jail.set_env("CALLDESK_SERVER_PORT", "9123");
            jail.set_env("CALLDESK_DESK_SEED_FIXTURES", "false");
            jail.set_env("CALLDESK_SESSION_LOGIN_PATH", "/signin");

            let config = load_config(Path::new("calldesk.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9123);
            assert!(!config.desk.seed_fixtures);
            assert_eq!(config.session.login_path, "/signin");
            Ok(())
        });
    }
}
