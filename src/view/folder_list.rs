use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

/// Render the folder table for the active list tab.
pub fn render_folder_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let folders = state.visible_folders();
    let title = format!(" {} ({}) ", state.workspace.active_tab().title(), folders.len());

    if folders.is_empty() {
        let empty = Paragraph::new(Line::from("No folders in this list"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Theme::MUTED_TEXT))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Reference", "Insured", "Vehicle", "Status", "Progress"]).style(
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = folders
        .iter()
        .map(|folder| {
            let status = folder.current_status();
            Row::new(vec![
                Cell::from(folder.reference.clone()),
                Cell::from(folder.insured_name.clone()),
                Cell::from(folder.vehicle.label()),
                Cell::from(status.label()).style(Style::default().fg(Theme::status_color(status))),
                Cell::from(format!("{:>3}%", folder.progress())),
            ])
            .style(Style::default().fg(Theme::TEXT))
        })
        .collect();

    let widths = [
        Constraint::Length(15),
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(20),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
                .title(title),
        )
        .row_highlight_style(
            Style::default()
                .bg(Theme::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        );

    let selected = state.ui.selected_folder_index.min(folders.len() - 1);
    let mut table_state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
