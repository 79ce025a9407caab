use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, View};
use crate::model::Theme;

/// Render footer status bar with keybinding hints.
/// Shows different keybindings based on current view.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(build_footer_text(state)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

fn hint(spans: &mut Vec<Span<'static>>, key: &'static str, action: &'static str) {
    spans.push(Span::styled(key, Style::default().fg(Theme::INFO)));
    spans.push(Span::raw(action));
}

/// Pure function: build footer text based on current view and state.
fn build_footer_text(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();

    hint(&mut spans, "q", ":quit ");
    hint(&mut spans, "1-5", ":views ");

    match state.nav.current_view() {
        View::Dashboard => {
            hint(&mut spans, "j/k", ":select ");
            hint(&mut spans, "Enter", ":open list ");
            hint(&mut spans, "e", ":edit schedule ");
        }
        View::FolderList => {
            hint(&mut spans, "j/k", ":select ");
            hint(&mut spans, "Enter", ":open folder ");
            hint(&mut spans, "[/]", ":tabs ");
            hint(&mut spans, "x", ":close tab ");
        }
        View::FolderDetail => {
            hint(&mut spans, "[/]", ":tabs ");
            hint(&mut spans, "x", ":close tab ");
            hint(&mut spans, "Esc", ":back ");
        }
        View::Messages | View::Pricing | View::Profile => {
            hint(&mut spans, "Esc", ":back ");
        }
    }

    hint(&mut spans, "?", ":help");
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn text(state: &AppState) -> String {
        build_footer_text(state)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn render_footer_does_not_panic() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = AppState::new();

        terminal
            .draw(|frame| render_footer(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn dashboard_hints() {
        let t = text(&AppState::new());
        assert!(t.contains("q:quit"));
        assert!(t.contains("Enter:open list"));
        assert!(t.contains("e:edit schedule"));
    }

    #[test]
    fn folder_list_hints() {
        let t = text(&AppState::new().with_view(View::FolderList));
        assert!(t.contains("Enter:open folder"));
        assert!(t.contains("x:close tab"));
    }

    #[test]
    fn profile_hints() {
        let t = text(&AppState::new().with_view(View::Profile));
        assert!(t.contains("Esc:back"));
        assert!(!t.contains("x:close tab"));
    }
}
