use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};

use crate::app::{AppState, Tab};
use crate::model::Theme;

/// Draw the folder workspace tab bar.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = state.workspace.tabs().iter().map(tab_title).collect();

    let tabs = Tabs::new(titles)
        .select(state.workspace.active_index())
        .style(Style::default().fg(Theme::MUTED_TEXT).bg(Theme::HEADER_BG))
        .highlight_style(
            Style::default()
                .fg(Theme::ACCENT_WARM)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled(" │ ", Style::default().fg(Theme::PANEL_BORDER)));

    frame.render_widget(tabs, area);
}

/// Permanent tab has no close marker.
fn tab_title(tab: &Tab) -> Line<'static> {
    if tab.is_permanent() {
        Line::from(tab.title().to_string())
    } else {
        Line::from(format!("{} ×", tab.title()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanent_tab_has_no_close_marker() {
        let line = tab_title(&Tab::main_list());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "All folders");
    }

    #[test]
    fn folder_tab_has_close_marker() {
        let line = tab_title(&Tab::folder_detail("f1".into(), "REF-1"));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "REF-1 ×");
    }
}
