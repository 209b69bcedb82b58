use std::sync::Arc;

use crate::{domain::content::Content, infrastructure::config::Config};

pub mod contact;
pub mod system;
pub mod ui;

use contact::ContactForm;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Read-only portfolio content shared with the renderer
    pub content: Arc<Content>,
    pub ui: UiState,
    pub contact: ContactForm,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    /// Initialize AppState with content and config
    ///
    /// `tick_rate` converts the configured notification lifetime into ticks.
    pub fn new_with_config(content: Arc<Content>, config: Config, tick_rate: f64) -> Self {
        let toast_ticks = (config.notification_secs as f64 * tick_rate).round() as u32;
        Self {
            content,
            ui: UiState::with_toast_ticks(toast_ticks),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Keys go to the form rather than to navigation
    pub fn is_editing(&self) -> bool {
        self.ui.is_editing()
    }
}
