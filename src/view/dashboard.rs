use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{FolderStatus, Theme, UserRole};

/// Render dashboard view into the given content area.
/// Left: folder count per status (selectable). Right: role summary.
pub fn render_dashboard(frame: &mut Frame, state: &AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_status_summary(frame, state, columns[0]);
    render_role_summary(frame, state, columns[1]);
}

fn render_status_summary(frame: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = FolderStatus::ALL
        .iter()
        .map(|status| {
            let count = state.domain.count_in_status(*status);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}  ", count),
                    Style::default().fg(Theme::status_color(*status)),
                ),
                Span::raw(status.label()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
                .title(" Folders by status (Enter to open) "),
        )
        .highlight_style(
            Style::default()
                .bg(Theme::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(state.ui.selected_status_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_role_summary(frame: &mut Frame, state: &AppState, area: Rect) {
    let open = state
        .domain
        .folders
        .iter()
        .filter(|f| f.current_status() != FolderStatus::Closed)
        .count();
    let awaiting_expertise = state.domain.count_in_status(FolderStatus::Declared)
        + state.domain.count_in_status(FolderStatus::ExpertiseScheduled);
    let in_workshop = state.domain.count_in_status(FolderStatus::RepairApproved)
        + state.domain.count_in_status(FolderStatus::InRepair);

    let (title, lines) = match state.role {
        UserRole::Repairer => (
            " Workshop ",
            vec![
                format!("{} open folders", open),
                format!("{} vehicles in the workshop", in_workshop),
                format!("{} awaiting expertise", awaiting_expertise),
            ],
        ),
        UserRole::Insurer => (
            " Claims ",
            vec![
                format!("{} open claims", open),
                format!("{} awaiting expertise", awaiting_expertise),
                format!("{} repairs under way", in_workshop),
            ],
        ),
        UserRole::Insured => (
            " My claims ",
            vec![
                format!("{} claims in progress", open),
                format!("{} unread messages", state.domain.messages.len()),
            ],
        ),
    };

    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Theme::TEXT))))
        .collect();

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::PANEL_BORDER))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}
