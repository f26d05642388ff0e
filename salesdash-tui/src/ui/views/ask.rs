use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use salesdash_core::ASK_ERROR_MESSAGE;

use crate::app::{App, Pane};
use crate::events::InputMode;

pub struct AskView;

impl AskView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let focused = app.focus == Pane::Ask;
        let editing = app.input_mode() == InputMode::Editing;

        let block = Block::default()
            .title(" Ask a Question ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.accent()
            } else {
                theme.border()
            }))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [input_area, button_area, answer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(inner);

        let input_block = Block::default()
            .title(" Question ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing {
                theme.accent_secondary()
            } else {
                theme.border()
            }));
        let input_inner = input_block.inner(input_area);

        let width = input_inner.width.max(1) as usize;
        let column = app.input.cursor_column();
        let h_scroll = column.saturating_sub(width - 1);

        let input_style = if editing {
            Style::default().fg(theme.foreground()).bg(theme.selection())
        } else {
            Style::default().fg(theme.foreground())
        };
        let input = Paragraph::new(app.input.value())
            .style(input_style)
            .scroll((0, u16::try_from(h_scroll).unwrap_or(u16::MAX)))
            .block(input_block);
        frame.render_widget(input, input_area);

        if editing {
            let x = input_inner.x + u16::try_from(column - h_scroll).unwrap_or(0);
            frame.set_cursor_position(Position::new(x, input_inner.y));
        }

        let button_style = if focused {
            Style::default()
                .fg(theme.background())
                .bg(theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent())
        };
        let hint = if editing {
            "  Enter to send, Esc to stop editing"
        } else {
            "  Press i to type a question"
        };
        let button = Paragraph::new(Line::from(vec![
            Span::styled(" Ask ", button_style),
            Span::styled(hint, Style::default().fg(theme.foreground_dim())),
        ]));
        frame.render_widget(button, button_area);

        if let Some(answer) = app.dashboard.render().answer {
            let color = if answer == ASK_ERROR_MESSAGE {
                theme.error()
            } else {
                theme.foreground()
            };
            let answer_widget = Paragraph::new(answer)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(" Answer ")
                        .borders(Borders::TOP)
                        .border_style(Style::default().fg(theme.border())),
                );
            frame.render_widget(answer_widget, answer_area);
        }
    }
}
