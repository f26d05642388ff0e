use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::LoadingState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(22),
                Constraint::Min(20),
                Constraint::Length(12),
            ])
            .split(area);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("$ ", Style::default().fg(theme.success())),
            Span::styled(
                "Salesdash ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", VERSION),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(logo, chunks[0]);

        let state_color = if app.loading_state.is_error() {
            theme.error()
        } else if app.loading_state.is_loading() {
            theme.info()
        } else {
            theme.success()
        };
        let summary = match app.loading_state {
            LoadingState::Idle => "Not mounted".to_string(),
            LoadingState::Loading => "Fetching sales data".to_string(),
            LoadingState::Success => {
                format!("{} representatives", app.dashboard.sales_reps().len())
            }
            LoadingState::Error => "Sales data unavailable".to_string(),
        };

        let status = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", app.loading_state.indicator()),
                Style::default().fg(state_color),
            ),
            Span::styled(summary, Style::default().fg(theme.foreground_dim())),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(status, chunks[1]);

        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let time_widget = Paragraph::new(Line::from(Span::styled(
            time,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(time_widget, chunks[2]);
    }
}
