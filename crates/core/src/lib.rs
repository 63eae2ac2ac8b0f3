pub mod config;
pub mod desk;
pub mod fixtures;
pub mod intake;
pub mod session;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DeskConfig,
    SanitizedConfig, ServerConfig, SessionConfig, SessionMode,
};
pub use desk::CallDesk;
pub use intake::{validate, FieldError, IntakeField, ValidIntake, ValidationErrors};
pub use session::{
    create_session_gate, FlagGate, OpenGate, SessionError, SessionGate, SessionRequest,
};
pub use ticket::{Status, StatusCounts, StatusFilter, Ticket, TicketError, TicketStore};
