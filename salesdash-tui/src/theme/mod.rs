mod colors;
mod palettes;

pub use colors::{hex_to_color, ColorPalette};
pub use palettes::{CATPPUCCIN_MOCHA, DRACULA, GRUVBOX_DARK, NORD, TOKYO_NIGHT};

use ratatui::style::Color;

pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;

    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn foreground_dim(&self) -> Color;

    fn surface(&self) -> Color;
    fn border(&self) -> Color;
    fn selection(&self) -> Color;

    fn accent(&self) -> Color;
    fn accent_secondary(&self) -> Color;

    fn success(&self) -> Color;
    fn warning(&self) -> Color;
    fn error(&self) -> Color;
    fn info(&self) -> Color;
}

impl Theme for ColorPalette {
    fn name(&self) -> &'static str {
        self.name
    }

    fn background(&self) -> Color {
        self.background
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn foreground_dim(&self) -> Color {
        self.foreground_dim
    }

    fn surface(&self) -> Color {
        self.surface
    }

    fn border(&self) -> Color {
        self.border
    }

    fn selection(&self) -> Color {
        self.selection
    }

    fn accent(&self) -> Color {
        self.accent
    }

    fn accent_secondary(&self) -> Color {
        self.accent_secondary
    }

    fn success(&self) -> Color {
        self.success
    }

    fn warning(&self) -> Color {
        self.warning
    }

    fn error(&self) -> Color {
        self.error
    }

    fn info(&self) -> Color {
        self.info
    }
}

pub struct ThemeManager {
    themes: Vec<ColorPalette>,
    current_index: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            themes: palettes::ALL.to_vec(),
            current_index: 0,
        }
    }

    pub fn current_theme(&self) -> &dyn Theme {
        &self.themes[self.current_index]
    }

    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.themes.len();
    }

    /// Case-insensitive. Returns false and keeps the current theme when
    /// no theme has that name.
    pub fn set_theme_by_name(&mut self, name: &str) -> bool {
        match self
            .themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                self.current_index = index;
                true
            }
            None => false,
        }
    }

    pub fn available_themes(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name).collect()
    }

    pub fn current_theme_name(&self) -> &'static str {
        self.current_theme().name()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
