use crate::settings::Settings;

/// Application state shared with every request handler.
///
/// Read-only after startup; requests own their batch and name set.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
