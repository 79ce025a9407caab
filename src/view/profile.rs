use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

/// Render the user profile. The schedule opens in edit mode when
/// navigation carries the auto-edit flag.
pub fn render_profile(frame: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    let profile = &state.domain.profile;
    let identity = Paragraph::new(vec![
        Line::from(Span::styled(
            profile.display_name.clone(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(profile.company.clone()),
        Line::from(profile.email.clone()),
        Line::from(Span::styled(
            state.role.label(),
            Style::default().fg(Theme::MUTED_TEXT),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::PANEL_BORDER))
            .title(" Profile "),
    );
    frame.render_widget(identity, rows[0]);

    frame.render_widget(schedule_panel(state), rows[1]);
}

fn schedule_panel(state: &AppState) -> Paragraph<'static> {
    let editing = state.nav.profile_auto_edit_schedule();
    let lines: Vec<Line> = state
        .domain
        .profile
        .schedule
        .iter()
        .map(|slot| {
            Line::from(vec![
                Span::styled(
                    format!("{:<5}", slot.day.to_string()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::raw(slot.describe()),
            ])
        })
        .collect();

    let (title, border) = if editing {
        (" Opening hours [editing] ", Theme::ACCENT_WARM)
    } else {
        (" Opening hours ", Theme::PANEL_BORDER)
    };

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    )
}
