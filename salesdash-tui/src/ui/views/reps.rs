use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use salesdash_core::{DealsSection, RepCard, RepsSection, LOADING_MESSAGE};

use crate::app::{App, Pane};
use crate::theme::Theme;
use crate::ui::widgets::Spinner;

pub struct RepsView;

impl RepsView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let page = app.dashboard.render();

        let title = match &page.reps {
            RepsSection::Cards(cards) => format!(" Sales Representatives ({}) ", cards.len()),
            _ => " Sales Representatives ".to_string(),
        };
        let border_color = if app.focus == Pane::Reps {
            theme.accent()
        } else {
            theme.border()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &page.reps {
            RepsSection::Loading => {
                Spinner::new()
                    .with_message(LOADING_MESSAGE)
                    .render(frame, inner, theme, app.animation_tick);
            }
            RepsSection::Empty => {
                let message = page.reps.message().unwrap_or_default();
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(theme.warning()),
                )));
                frame.render_widget(paragraph, inner);
            }
            RepsSection::Cards(cards) => {
                let lines: Vec<Line> = cards
                    .iter()
                    .flat_map(|card| Self::card_lines(card, theme))
                    .collect();
                let offset = u16::try_from(app.scroll_offset).unwrap_or(u16::MAX);
                frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
            }
        }
    }

    /// Number of lines the cards occupy. Must agree with `card_lines`.
    pub fn content_height(section: &RepsSection) -> usize {
        section
            .cards()
            .iter()
            .map(|card| 3 + card.deals.lines().len().max(1))
            .sum()
    }

    fn card_lines<'a>(card: &'a RepCard, theme: &dyn Theme) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(
                card.name.as_str(),
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", card.role),
                Style::default().fg(theme.foreground_dim()),
            )),
        ];

        match &card.deals {
            DealsSection::NoDeals => {
                let message = card.deals.message().unwrap_or_default();
                lines.push(Line::from(Span::styled(
                    format!("    {}", message),
                    Style::default()
                        .fg(theme.foreground_dim())
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            DealsSection::Deals(deals) => {
                for deal in deals {
                    lines.push(Line::from(vec![
                        Span::styled("    • ", Style::default().fg(theme.accent_secondary())),
                        Span::styled(deal.client.as_str(), Style::default().fg(theme.foreground())),
                        Span::styled(" - ", Style::default().fg(theme.foreground_dim())),
                        Span::styled(
                            deal.status.as_str(),
                            Style::default().fg(status_color(&deal.status, theme)),
                        ),
                        Span::styled(" - ", Style::default().fg(theme.foreground_dim())),
                        Span::styled(deal.value.as_str(), Style::default().fg(theme.info())),
                    ]));
                }
            }
        }

        lines.push(Line::from(""));
        lines
    }
}

fn status_color(status: &str, theme: &dyn Theme) -> ratatui::style::Color {
    match status.to_lowercase().as_str() {
        "closed won" | "won" => theme.success(),
        "closed lost" | "lost" => theme.error(),
        _ => theme.warning(),
    }
}
