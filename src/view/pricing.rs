use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

use super::components::format::format_cents;

/// Render the labour pricing grid.
pub fn render_pricing(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::ACTIVE_BORDER))
        .title(" Labour pricing ");

    if !state.role.can_view_pricing() {
        let denied = Paragraph::new("Pricing is not available for this role")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Theme::MUTED_TEXT))
            .block(block);
        frame.render_widget(denied, area);
        return;
    }

    let header = Row::new(vec!["Rate", "Category", "Hourly (excl. VAT)"]).style(
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .domain
        .pricing
        .iter()
        .map(|line| {
            Row::new(vec![
                line.label.clone(),
                line.category.label().to_string(),
                format_cents(Some(line.hourly_rate_cents)),
            ])
            .style(Style::default().fg(Theme::TEXT))
        })
        .collect();

    let widths = [
        Constraint::Min(22),
        Constraint::Length(12),
        Constraint::Length(20),
    ];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
