use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calldesk_core::{CallDesk, Config, SanitizedConfig, SessionGate};

/// Shared application state
///
/// The desk sits behind a plain mutex: every request takes it for one
/// synchronous desk call and never holds it across an await.
pub struct AppState {
    config: Config,
    session_gate: Arc<dyn SessionGate>,
    desk: Mutex<CallDesk>,
}

impl AppState {
    pub fn new(config: Config, session_gate: Arc<dyn SessionGate>, desk: CallDesk) -> Self {
        Self {
            config,
            session_gate,
            desk: Mutex::new(desk),
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn session_gate(&self) -> &dyn SessionGate {
        self.session_gate.as_ref()
    }

    /// Where clients without a session are pointed.
    pub fn login_path(&self) -> &str {
        &self.config.session.login_path
    }

    /// Lock the desk for one operation.
    ///
    /// A panic in another handler cannot leave the desk half-updated (every
    /// desk call is a single in-memory step), so a poisoned lock is reused.
    pub fn desk(&self) -> MutexGuard<'_, CallDesk> {
        self.desk.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
