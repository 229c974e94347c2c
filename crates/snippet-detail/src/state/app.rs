//! Application State
//!
//! Everything the detail page knows, reduced one action at a time.

use super::{ConfirmationState, ModeController, NotificationLog, PickerState, SessionState};
use snippet_config::AppConfig;

/// Navigation away from the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The session is not authenticated
    Login,
    /// The snippet is gone or the user went back
    Dashboard,
}

impl Redirect {
    /// Target path as configured
    pub fn path<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            Redirect::Login => &config.login_path,
            Redirect::Dashboard => &config.dashboard_path,
        }
    }
}

/// Root state of the detail page
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionState,
    pub mode: ModeController,
    pub picker: PickerState,
    pub notifications: NotificationLog,
    /// Open confirmation prompt, if any
    pub confirmation: Option<ConfirmationState>,
    /// Set once the page wants to navigate away; first redirect wins
    pub redirect: Option<Redirect>,
    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: SessionState::default(),
            mode: ModeController::new(),
            picker: PickerState::default(),
            notifications: NotificationLog::with_history(config.notification_history),
            confirmation: None,
            redirect: None,
            config,
        }
    }
}
