use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use salesdash_core::{DashboardApi, DashboardConfig, DashboardState, FetchGateway};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, warn};

use crate::data::{DataLoader, LoadingState};
use crate::events::{Action, AppEvent, EventHandler, InputMode, TextInput};
use crate::theme::{Theme, ThemeManager};
use crate::ui::layout::MainLayout;
use crate::ui::views::RepsView;

const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Reps,
    Ask,
}

impl Pane {
    pub fn toggle(&self) -> Pane {
        match self {
            Pane::Reps => Pane::Ask,
            Pane::Ask => Pane::Reps,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub focus: Pane,
    pub dashboard: DashboardState,
    pub input: TextInput,
    pub theme_manager: ThemeManager,
    pub status_message: Option<String>,
    pub event_handler: EventHandler,
    pub loading_state: LoadingState,
    pub show_help: bool,
    pub scroll_offset: usize,
    pub animation_tick: u64,
    pub tick_rate: Duration,
    loader: DataLoader,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let gateway = FetchGateway::new(&config.api)?;
        Ok(Self::with_api(config, Arc::new(gateway)))
    }

    pub fn with_api(config: &DashboardConfig, api: Arc<dyn DashboardApi>) -> Self {
        let (tx, events_rx) = mpsc::unbounded_channel();

        let mut theme_manager = ThemeManager::new();
        let status_message = if theme_manager.set_theme_by_name(&config.tui.theme) {
            format!(
                "Theme: {}. Press '?' for help.",
                theme_manager.current_theme_name()
            )
        } else {
            warn!(theme = %config.tui.theme, "Unknown theme, using default");
            format!(
                "Unknown theme '{}', using {}",
                config.tui.theme,
                theme_manager.current_theme_name()
            )
        };

        Self {
            should_quit: false,
            focus: Pane::Reps,
            dashboard: DashboardState::default(),
            input: TextInput::new(),
            theme_manager,
            status_message: Some(status_message),
            event_handler: EventHandler::new(),
            loading_state: LoadingState::Idle,
            show_help: false,
            scroll_offset: 0,
            animation_tick: 0,
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms),
            loader: DataLoader::new(api, tx),
            events_rx,
        }
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }

    pub fn input_mode(&self) -> InputMode {
        self.event_handler.input_mode()
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);

        self.mount();

        loop {
            terminal.draw(|frame| {
                MainLayout::render(frame, self);
            })?;

            tokio::select! {
                _ = tick.tick() => self.on_tick(),
                Some(event) = self.events_rx.recv() => self.handle_app_event(event),
                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },
            }

            if self.should_quit {
                break;
            }
        }

        self.loader.unmount();
        Ok(())
    }

    /// Starts a new mount: fresh state, one list fetch.
    pub fn mount(&mut self) {
        self.dashboard.begin_mount();
        self.input.clear();
        self.scroll_offset = 0;
        self.loading_state = LoadingState::Loading;
        self.loader.mount();
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Waits for the next background result and applies it.
    pub async fn process_next_app_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.handle_app_event(event);
                true
            }
            None => false,
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SalesRepsLoaded { mount, result } => {
                if !self.loader.is_current(mount) {
                    debug!(mount, "Dropping sales reps from a stale mount");
                    return;
                }

                match &result {
                    Ok(reps) => {
                        self.loading_state = LoadingState::Success;
                        self.status_message =
                            Some(format!("Loaded {} representatives", reps.len()));
                    }
                    Err(e) => {
                        self.loading_state = LoadingState::Error;
                        self.status_message = Some(format!(
                            "Load failed [{}]. Press 'r' to retry.",
                            e.error_code()
                        ));
                    }
                }
                self.dashboard.apply_sales_reps(result);
                self.scroll_offset = 0;
            }
            AppEvent::AnswerReady { mount, result } => {
                if !self.loader.is_current(mount) {
                    debug!(mount, "Dropping answer from a stale mount");
                    return;
                }
                self.dashboard.apply_answer(result);
            }
        }
    }

    pub fn handle_terminal_event(&mut self, event: Event) {
        if self.show_help {
            if let Event::Key(key) = event {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                    self.show_help = false;
                }
            }
            return;
        }

        if let Some(action) = self.event_handler.handle_event(event) {
            self.execute_action(action);
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleFocus => self.focus = self.focus.toggle(),
            Action::Up => self.scroll_up(1),
            Action::Down => self.scroll_down(1),
            Action::PageUp => self.scroll_up(PAGE_SIZE),
            Action::PageDown => self.scroll_down(PAGE_SIZE),
            Action::Top => self.scroll_offset = 0,
            Action::Bottom => self.scroll_offset = self.max_scroll(),
            Action::StartEditing => self.focus = Pane::Ask,
            Action::StopEditing => {}
            Action::Submit => self.submit_question(),
            Action::Remount => {
                self.status_message = Some("Reloading sales data...".to_string());
                self.mount();
            }
            Action::ToggleTheme => {
                self.theme_manager.cycle_theme();
                self.status_message =
                    Some(format!("Theme: {}", self.theme_manager.current_theme_name()));
            }
            Action::Help => self.show_help = true,
            Action::InsertChar(c) => self.edit(|input| input.insert(c)),
            Action::Paste(text) => self.edit(|input| input.insert_str(&text)),
            Action::DeleteBackward => self.edit(TextInput::delete_backward),
            Action::DeleteForward => self.edit(TextInput::delete_forward),
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::CursorHome => self.input.move_home(),
            Action::CursorEnd => self.input.move_end(),
            Action::ClearInput => self.edit(TextInput::clear),
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut TextInput)) {
        f(&mut self.input);
        self.dashboard.set_question(self.input.value());
    }

    /// Sends the current question. Only reachable from the Ask pane.
    fn submit_question(&mut self) {
        if self.focus != Pane::Ask {
            return;
        }

        let question = self.dashboard.question().to_string();
        debug!(len = question.len(), "Submitting question");
        self.loader.ask(question);
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        RepsView::content_height(&self.dashboard.render().reps).saturating_sub(1)
    }
}
