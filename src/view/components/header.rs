use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, View};
use crate::model::Theme;

use super::format::format_elapsed;

/// Render header bar.
/// Shows: app name, role, view indicator, last error, elapsed time.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Paragraph::new(build_header_text(state)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
pub(crate) fn build_header_text(state: &AppState) -> Line<'static> {
    let view_indicator = match state.nav.current_view() {
        View::Dashboard => "[1:Dashboard]",
        View::FolderList => "[2:Folders]",
        View::FolderDetail => "[2:Folder]",
        View::Messages => "[3:Messages]",
        View::Pricing => "[4:Pricing]",
        View::Profile => "[5:Profile]",
    };

    let mut spans = vec![
        Span::styled("claimdesk", Style::default().fg(Theme::ACCENT)),
        Span::raw(" "),
        Span::styled(
            format!("({})", state.role.label()),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
        Span::raw(" "),
        Span::styled(view_indicator, Style::default().fg(Theme::INFO)),
    ];

    if let Some(err) = state.ui.errors.back() {
        spans.push(Span::styled(
            format!("  ! {}", err),
            Style::default().fg(Theme::ERROR),
        ));
    }

    spans.push(Span::styled(
        format!("  {}", format_elapsed(state.started_at.elapsed().as_secs())),
        Style::default().fg(Theme::MUTED_TEXT),
    ));

    Line::from(spans)
}
