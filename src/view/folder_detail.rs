use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{Folder, Theme};

use super::components::format::format_cents;

/// Render the folder selected in navigation.
pub fn render_folder_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    let Some(folder) = state.selected_folder() else {
        let missing = Paragraph::new("Folder not found")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Theme::ERROR))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(missing, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary
            Constraint::Length(3), // Progress
            Constraint::Min(4),    // Timeline + documents
        ])
        .split(area);

    render_summary(frame, folder, rows[0]);
    render_progress(frame, folder, rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_timeline(frame, folder, columns[0]);
    render_documents(frame, folder, columns[1]);
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(value, Style::default().fg(Theme::TEXT)),
    ])
}

fn render_summary(frame: &mut Frame, folder: &Folder, area: Rect) {
    let lines = vec![
        field("Insured", folder.insured_name.clone()),
        field("Vehicle", folder.vehicle.label()),
        field("Insurer", folder.insurer.clone()),
        field("Repairer", folder.repairer.clone()),
        field("Estimate", format_cents(folder.estimate_cents)),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
            .title(Span::styled(
                format!(" {} ", folder.reference),
                Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(paragraph, area);
}

fn render_progress(frame: &mut Frame, folder: &Folder, area: Rect) {
    let status = folder.current_status();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Theme::status_color(status)))
        .percent(folder.progress())
        .label(format!("{} - {}%", status.label(), folder.progress()));

    frame.render_widget(gauge, area);
}

fn render_timeline(frame: &mut Frame, folder: &Folder, area: Rect) {
    let items: Vec<ListItem> = folder
        .status_history
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.date.format("%Y-%m-%d  ").to_string(),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::styled(
                    entry.status.label(),
                    Style::default().fg(Theme::status_color(entry.status)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Timeline "));
    frame.render_widget(list, area);
}

fn render_documents(frame: &mut Frame, folder: &Folder, area: Rect) {
    let items: Vec<ListItem> = folder
        .documents
        .iter()
        .map(|doc| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<14}", doc.kind.label()),
                    Style::default().fg(Theme::INFO),
                ),
                Span::raw(doc.name.clone()),
            ]))
        })
        .collect();

    let title = format!(
        " Documents ({}, {} photos) ",
        folder.documents.len(),
        folder.photo_count()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}
