use crate::app::{handle_key, AppState};
use crate::event::AppEvent;

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// No I/O, no side effects - fully deterministic and unit testable.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::Key(key) => handle_key(state, key),

        // Elapsed time is computed in the view from started_at
        AppEvent::Tick(_) => state,

        AppEvent::DatasetLoaded(dataset) => {
            log::info!("dataset loaded: {} folders", dataset.folders.len());
            state.domain = dataset;
            state.ui.selected_folder_index = 0;
            state
        }

        AppEvent::Error { source, error } => {
            log::warn!("{}: {}", source, error);
            state.push_error(format!("{}: {}", source, error));
            state
        }
    }
}
