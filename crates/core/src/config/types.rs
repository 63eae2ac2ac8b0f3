use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub session: SessionConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub desk: DeskConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Session gate configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub mode: SessionMode,
    /// Header carrying the session flag (flag mode only)
    #[serde(default = "default_session_header")]
    pub header: String,
    /// Where clients without a session are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: SessionMode::None,
            header: default_session_header(),
            login_path: default_login_path(),
        }
    }
}

fn default_session_header() -> String {
    "x-calldesk-session".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    None,
    Flag,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::None => "none",
            SessionMode::Flag => "flag",
        }
    }
}

/// Call desk configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeskConfig {
    /// Load the sample tickets at startup
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

fn default_seed_fixtures() -> bool {
    true
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub session: SanitizedSessionConfig,
    pub server: ServerConfig,
    pub desk: DeskConfig,
}

/// Session config without the header name
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSessionConfig {
    pub mode: String,
    pub login_path: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            session: SanitizedSessionConfig {
                mode: config.session.mode.as_str().to_string(),
                login_path: config.session.login_path.clone(),
            },
            server: config.server.clone(),
            desk: config.desk.clone(),
        }
    }
}
