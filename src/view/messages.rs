use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::model::{message, Theme};

/// Render message threads, one block of lines per folder.
/// The folder selected in navigation (if any) is listed first.
pub fn render_messages(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut folders: Vec<_> = state.domain.folders.iter().collect();
    if let Some(selected) = state.nav.selected_folder_id() {
        folders.sort_by_key(|f| &f.id != selected);
    }

    let mut lines: Vec<Line> = Vec::new();
    for folder in folders {
        let thread = message::thread(&state.domain.messages, &folder.id);
        if thread.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            format!("{} - {}", folder.reference, folder.insured_name),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        )));
        for msg in thread {
            lines.push(Line::from(vec![
                Span::styled(
                    msg.sent_at.format("  %d/%m %H:%M ").to_string(),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::styled(
                    format!("{:<9}", msg.author.label()),
                    Style::default().fg(Theme::author_color(msg.author)),
                ),
                Span::raw(msg.body.clone()),
            ]));
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No messages",
            Style::default().fg(Theme::MUTED_TEXT),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
                .title(" Messages "),
        );

    frame.render_widget(paragraph, area);
}
