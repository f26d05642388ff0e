use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

const KEYBINDS: &[(&str, &str)] = &[
    ("q / Ctrl-c", "Quit"),
    ("Tab", "Switch focus between panes"),
    ("j / ↓", "Scroll representatives down"),
    ("k / ↑", "Scroll representatives up"),
    ("g / G", "Jump to top / bottom"),
    ("i or /", "Edit the question"),
    ("Enter", "Send the question"),
    ("Esc", "Stop editing"),
    ("Ctrl-u", "Clear the question"),
    ("r", "Reload: fresh state, fetch again"),
    ("t", "Next theme"),
    ("?", "Toggle this help"),
];

pub struct HelpView;

impl HelpView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = KEYBINDS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<12}", key),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.foreground())),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Theme: {}", app.theme_manager.current_theme_name()),
            Style::default().fg(theme.foreground_dim()),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
