use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Margin, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::ui::views::{AskView, HelpView, RepsView};
use crate::ui::widgets::{Footer, Header};

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = app.current_theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(theme.background())
                    .fg(theme.foreground()),
            ),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(size);

        Header::render(frame, chunks[0], app);

        let content_area = chunks[1].inner(Margin::new(1, 0));
        let panes = Self::create_two_column_layout(content_area, 60);
        RepsView::render(frame, panes[0], app);
        AskView::render(frame, panes[1], app);

        Footer::render(frame, chunks[2], app);

        if app.show_help {
            HelpView::render(frame, Self::centered_rect(size, 60, 18), app);
        }
    }

    pub fn create_two_column_layout(area: Rect, left_percent: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(left_percent),
                Constraint::Percentage(100 - left_percent),
            ])
            .split(area)
            .to_vec()
    }

    /// A `width` x `height` rect centered in `area`, shrunk to fit.
    pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
            .flex(Flex::Center)
            .areas(row);
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = MainLayout::centered_rect(area, 60, 18);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 18);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 11);
    }

    #[test]
    fn test_centered_rect_shrinks_to_fit() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = MainLayout::centered_rect(area, 60, 18);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn test_two_column_layout() {
        let cols = MainLayout::create_two_column_layout(Rect::new(0, 0, 100, 20), 60);
        assert_eq!(cols[0].width, 60);
        assert_eq!(cols[1].width, 40);
    }
}
