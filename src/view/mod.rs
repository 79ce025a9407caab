use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{AppState, View};

pub mod components;
pub mod dashboard;
pub mod folder_detail;
pub mod folder_list;
pub mod messages;
pub mod pricing;
pub mod profile;

pub use dashboard::render_dashboard;
pub use folder_detail::render_folder_detail;
pub use folder_list::render_folder_list;
pub use messages::render_messages;
pub use pricing::render_pricing;
pub use profile::render_profile;

/// Main view dispatcher.
/// Header, tab bar (workspace views only), current view, footer, then help.
pub fn render(state: &AppState, frame: &mut Frame) {
    let view = state.nav.current_view();
    let tab_bar_height = if view.is_workspace() { 1 } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Header
            Constraint::Length(tab_bar_height), // Tab bar
            Constraint::Min(3),                 // Content
            Constraint::Length(1),              // Footer
        ])
        .split(frame.area());

    components::render_header(frame, layout[0], state);
    if view.is_workspace() {
        components::render_tab_bar(frame, layout[1], state);
    }

    let content = layout[2];
    match view {
        View::Dashboard => render_dashboard(frame, state, content),
        View::FolderList => render_folder_list(frame, state, content),
        View::FolderDetail => render_folder_detail(frame, state, content),
        View::Messages => render_messages(frame, state, content),
        View::Pricing => render_pricing(frame, state, content),
        View::Profile => render_profile(frame, state, content),
    }

    components::render_footer(frame, layout[3], state);

    if state.ui.show_help {
        components::render_help_overlay(frame);
    }
}
