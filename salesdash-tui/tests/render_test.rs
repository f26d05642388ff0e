use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use salesdash_core::{
    DashboardApi, DashboardConfig, Deal, SalesDashError, SalesDashResult, SalesRep,
};
use salesdash_tui::app::App;
use salesdash_tui::ui::layout::MainLayout;

struct FixedApi {
    reps: Option<Vec<SalesRep>>,
    answer: Option<&'static str>,
}

#[async_trait]
impl DashboardApi for FixedApi {
    async fn fetch_sales_reps(&self) -> SalesDashResult<Vec<SalesRep>> {
        self.reps
            .clone()
            .ok_or_else(|| SalesDashError::Transport("connection refused".to_string()))
    }

    async fn ask_question(&self, _question: &str) -> SalesDashResult<String> {
        self.answer
            .map(str::to_string)
            .ok_or_else(|| SalesDashError::Decode("expected value".to_string()))
    }
}

fn app(reps: Option<Vec<SalesRep>>, answer: Option<&'static str>) -> App {
    App::with_api(&DashboardConfig::default(), Arc::new(FixedApi { reps, answer }))
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
    terminal
        .draw(|frame| MainLayout::render(frame, app))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_terminal_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[tokio::test]
async fn test_loading_screen() {
    let mut app = app(Some(Vec::new()), None);
    app.mount();

    let screen = draw(&app);
    assert!(screen.contains("Loading sales data..."));
    assert!(screen.contains("Sales Representatives"));
    assert!(!screen.contains("No sales representatives found."));
}

#[tokio::test]
async fn test_cards_render_deals() {
    let reps = vec![
        SalesRep::new(1, "Alice", "Senior Sales Executive")
            .with_deal(Deal::new(1, "Acme", "won", Some(12000.0)))
            .with_deal(Deal::new(2, "Globex", "pending", None)),
        SalesRep::new(2, "Bob", "Account Manager"),
        SalesRep::new(3, "Carol", "Sales Associate")
            .with_deal(Deal::new(3, "Initech", "lost", Some(1234.5))),
    ];
    let mut app = app(Some(reps), None);
    app.mount();
    app.process_next_app_event().await;

    let screen = draw(&app);
    assert!(screen.contains("Sales Representatives (3)"));
    assert!(screen.contains("Alice"));
    assert!(screen.contains("Senior Sales Executive"));
    assert!(screen.contains("Acme - won - $12,000"));
    assert!(screen.contains("Globex - pending - N/A"));
    assert!(screen.contains("No deals recorded for this representative."));
    assert!(screen.contains("Initech - lost - $1,234.5"));
    assert!(!screen.contains("Loading sales data..."));
}

#[tokio::test]
async fn test_failed_fetch_renders_empty_message() {
    let mut app = app(None, None);
    app.mount();
    app.process_next_app_event().await;

    let screen = draw(&app);
    assert!(screen.contains("No sales representatives found."));
    assert!(screen.contains("E1001"));
}

#[tokio::test]
async fn test_answer_region() {
    let mut app = app(Some(Vec::new()), Some("42"));
    app.mount();
    app.process_next_app_event().await;

    let screen = draw(&app);
    assert!(!screen.contains(" Answer "));

    press(&mut app, KeyCode::Char('i'));
    for c in "meaning?".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    app.process_next_app_event().await;

    let screen = draw(&app);
    assert!(screen.contains("meaning?"));
    assert!(screen.contains(" Answer "));
    assert!(screen.contains("42"));
}

#[tokio::test]
async fn test_answer_error_text() {
    let mut app = app(Some(Vec::new()), None);
    app.mount();
    app.process_next_app_event().await;

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    app.process_next_app_event().await;

    let screen = draw(&app);
    assert!(screen.contains("Error getting AI response."));
}

#[test]
fn test_help_overlay() {
    let mut app = app(Some(Vec::new()), None);
    press(&mut app, KeyCode::Char('?'));

    let screen = draw(&app);
    assert!(screen.contains(" Keys "));
    assert!(screen.contains("Send the question"));
    assert!(screen.contains("Theme: Tokyo Night"));
}
