use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use salesdash_core::{SalesDashResult, SalesRep};

/// Results coming back from background tasks. `mount` is the generation
/// of the mount that spawned the task.
#[derive(Debug)]
pub enum AppEvent {
    SalesRepsLoaded {
        mount: u64,
        result: SalesDashResult<Vec<SalesRep>>,
    },
    AnswerReady {
        mount: u64,
        result: SalesDashResult<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFocus,
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,
    StartEditing,
    StopEditing,
    Submit,
    Remount,
    ToggleTheme,
    Help,
    InsertChar(char),
    Paste(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Maps terminal events to actions. Key meaning depends on the input mode.
pub struct EventHandler {
    input_mode: InputMode,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Normal,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) if self.input_mode == InputMode::Editing => Some(Action::Paste(text)),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode_key(key),
            InputMode::Editing => self.handle_editing_mode_key(key),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl_pressed) {
            (KeyCode::Char('q'), false) => Some(Action::Quit),
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Some(Action::ToggleFocus),
            (KeyCode::Char('j'), false) | (KeyCode::Down, _) => Some(Action::Down),
            (KeyCode::Char('k'), false) | (KeyCode::Up, _) => Some(Action::Up),
            (KeyCode::Char('g'), false) | (KeyCode::Home, _) => Some(Action::Top),
            (KeyCode::Char('G'), false) | (KeyCode::End, _) => Some(Action::Bottom),
            (KeyCode::PageUp, _) | (KeyCode::Char('u'), true) => Some(Action::PageUp),
            (KeyCode::PageDown, _) | (KeyCode::Char('d'), true) => Some(Action::PageDown),
            (KeyCode::Char('i'), false) | (KeyCode::Char('/'), false) => {
                self.input_mode = InputMode::Editing;
                Some(Action::StartEditing)
            }
            (KeyCode::Enter, _) => Some(Action::Submit),
            (KeyCode::Char('r'), false) => Some(Action::Remount),
            (KeyCode::Char('t'), false) => Some(Action::ToggleTheme),
            (KeyCode::Char('?'), false) => Some(Action::Help),
            _ => None,
        }
    }

    fn handle_editing_mode_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl_pressed) {
            (KeyCode::Esc, _) => {
                self.input_mode = InputMode::Normal;
                Some(Action::StopEditing)
            }
            (KeyCode::Enter, _) => Some(Action::Submit),
            (KeyCode::Char('u'), true) => Some(Action::ClearInput),
            (KeyCode::Char('a'), true) | (KeyCode::Home, _) => Some(Action::CursorHome),
            (KeyCode::Char('e'), true) | (KeyCode::End, _) => Some(Action::CursorEnd),
            (KeyCode::Char(c), false) => Some(Action::InsertChar(c)),
            (KeyCode::Backspace, _) => Some(Action::DeleteBackward),
            (KeyCode::Delete, _) => Some(Action::DeleteForward),
            (KeyCode::Left, _) => Some(Action::CursorLeft),
            (KeyCode::Right, _) => Some(Action::CursorRight),
            _ => None,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::Up),
            MouseEventKind::ScrollDown => Some(Action::Down),
            _ => None,
        }
    }
}
