use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner {
    frames: &'static [&'static str],
    message: Option<String>,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frames: BRAILLE,
            message: None,
        }
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn frame(&self, tick: u64) -> &'static str {
        self.frames[(tick as usize) % self.frames.len()]
    }

    pub fn line_for<'a>(&'a self, theme: &dyn Theme, tick: u64) -> Line<'a> {
        let mut spans = vec![Span::styled(
            self.frame(tick),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(ref msg) = self.message {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                msg.as_str(),
                Style::default().fg(theme.foreground_dim()),
            ));
        }

        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &dyn Theme, tick: u64) {
        frame.render_widget(Paragraph::new(self.line_for(theme, tick)), area);
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
