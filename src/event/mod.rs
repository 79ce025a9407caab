use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::error::ClaimdeskError;
use crate::model::Dataset;

/// All events that can occur in the application.
/// Sourced from keyboard input, timers and startup loading.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick (for elapsed time updates)
    Tick(DateTime<Utc>),

    /// Dataset replaced (startup load from a JSON file)
    DatasetLoaded(Dataset),

    /// Error occurred (non-fatal - dataset, logging)
    Error { source: String, error: ClaimdeskError },
}
