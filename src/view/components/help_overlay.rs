use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::Theme;

/// Render the help overlay as a centered popup.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    ))
}

fn build_help_text() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        section("VIEWS"),
        Line::from("  1           - Dashboard"),
        Line::from("  2           - Folder workspace"),
        Line::from("  3           - Messages"),
        Line::from("  4           - Pricing grid"),
        Line::from("  5           - Profile"),
        Line::from("  e           - Edit opening schedule"),
        Line::from("  Esc         - Back to dashboard"),
        Line::from(""),
        section("FOLDER TABS"),
        Line::from("  [ / ]       - Previous / next tab"),
        Line::from("  x           - Close tab"),
        Line::from(""),
        section("LISTS"),
        Line::from("  j / k       - Move selection"),
        Line::from("  Enter       - Open status list / open folder"),
        Line::from(""),
        section("GENERAL"),
        Line::from("  ?           - Help"),
        Line::from("  q           - Quit"),
    ]
}

/// Create a centered rect using up certain percentage of the available rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_render_help_overlay() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render_help_overlay(frame)).unwrap();
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 70, parent);
        assert!(popup.x >= parent.x && popup.right() <= parent.right());
        assert!(popup.y >= parent.y && popup.bottom() <= parent.bottom());
    }
}
