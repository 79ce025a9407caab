use crossterm::event::{KeyCode, KeyEvent};

use crate::app::router::View;
use crate::app::AppState;
use crate::model::FolderStatus;

/// Pure navigation state transition function.
/// Takes current state + keyboard event, returns new state.
/// No I/O, no side effects, fully unit testable.
pub fn handle_key(mut state: AppState, key: KeyEvent) -> AppState {
    // Help overlay has priority
    if state.ui.show_help {
        state.ui.show_help = false;
        return state;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            state
        }
        KeyCode::Char('?') => {
            state.ui.show_help = true;
            state
        }
        KeyCode::Char('1') => {
            state.nav.navigate_to(View::Dashboard, None);
            state
        }
        KeyCode::Char('2') => show_workspace(state),
        KeyCode::Char('3') => {
            state.nav.navigate_to(View::Messages, None);
            state
        }
        KeyCode::Char('4') => {
            if state.role.can_view_pricing() {
                state.nav.navigate_to(View::Pricing, None);
            }
            state
        }
        KeyCode::Char('5') => {
            state.nav.navigate_to(View::Profile, None);
            state
        }
        KeyCode::Char('e') => {
            state.nav.navigate_to_profile_schedule();
            state
        }
        KeyCode::Esc => {
            state.nav.go_back();
            state
        }
        KeyCode::Char(']') if state.nav.current_view().is_workspace() => {
            state.workspace.next_tab(&mut state.nav);
            state
        }
        KeyCode::Char('[') if state.nav.current_view().is_workspace() => {
            state.workspace.prev_tab(&mut state.nav);
            state
        }
        KeyCode::Char('x') if state.nav.current_view().is_workspace() => {
            state.workspace.close_active_tab(&mut state.nav);
            state.ui.selected_folder_index = 0;
            state
        }
        KeyCode::Char('j') | KeyCode::Down => select_next(state),
        KeyCode::Char('k') | KeyCode::Up => select_prev(state),
        KeyCode::Enter => drill_down(state),
        _ => state,
    }
}

/// Bring the folder workspace back on screen by re-activating its active tab.
fn show_workspace(mut state: AppState) -> AppState {
    let id = state.workspace.active_tab_id().clone();
    state.workspace.set_active_tab(&id, &mut state.nav);
    state
}

fn select_next(mut state: AppState) -> AppState {
    match state.nav.current_view() {
        View::Dashboard => {
            let last = FolderStatus::ALL.len() - 1;
            state.ui.selected_status_index = (state.ui.selected_status_index + 1).min(last);
        }
        View::FolderList => {
            let count = state.visible_folders().len();
            if count > 0 {
                state.ui.selected_folder_index =
                    (state.ui.selected_folder_index + 1).min(count - 1);
            }
        }
        _ => {}
    }
    state
}

fn select_prev(mut state: AppState) -> AppState {
    match state.nav.current_view() {
        View::Dashboard => {
            state.ui.selected_status_index = state.ui.selected_status_index.saturating_sub(1);
        }
        View::FolderList => {
            state.ui.selected_folder_index = state.ui.selected_folder_index.saturating_sub(1);
        }
        _ => {}
    }
    state
}

/// Enter: dashboard opens a filtered list tab, folder list opens the folder.
fn drill_down(mut state: AppState) -> AppState {
    match state.nav.current_view() {
        View::Dashboard => {
            let status = state.selected_status();
            state
                .workspace
                .open_list_tab(status.label(), Some(status), &mut state.nav);
            state.ui.selected_folder_index = 0;
        }
        View::FolderList => {
            let target = state
                .visible_folders()
                .get(state.ui.selected_folder_index)
                .map(|f| (f.id.clone(), f.reference.clone()));
            if let Some((folder_id, reference)) = target {
                state.workspace.open_folder(folder_id, reference, &mut state.nav);
            }
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn help_swallows_next_key() {
        let state = handle_key(AppState::new(), key(KeyCode::Char('?')));
        assert!(state.ui.show_help);

        let state = handle_key(state, key(KeyCode::Char('q')));
        assert!(!state.ui.show_help);
        assert!(!state.should_quit);
    }

    #[test]
    fn tab_keys_ignored_outside_workspace() {
        let mut state = AppState::new();
        state
            .workspace
            .open_folder("f1".into(), "SIN-2024-0001", &mut state.nav);
        state.nav.navigate_to(View::Messages, None);

        let state = handle_key(state, key(KeyCode::Char('x')));
        assert_eq!(state.workspace.len(), 2);
        assert_eq!(state.nav.current_view(), View::Messages);
    }

    #[test]
    fn selection_clamps_to_status_list() {
        let mut state = AppState::new();
        for _ in 0..20 {
            state = handle_key(state, key(KeyCode::Char('j')));
        }
        assert_eq!(state.ui.selected_status_index, FolderStatus::ALL.len() - 1);
    }
}
