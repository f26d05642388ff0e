use super::colors::{hex_to_color, ColorPalette};

pub const TOKYO_NIGHT: ColorPalette = ColorPalette {
    name: "Tokyo Night",
    background: hex_to_color(0x1a1b26),
    foreground: hex_to_color(0xc0caf5),
    foreground_dim: hex_to_color(0x565f89),
    surface: hex_to_color(0x24283b),
    border: hex_to_color(0x414868),
    selection: hex_to_color(0x364a82),
    accent: hex_to_color(0x7aa2f7),
    accent_secondary: hex_to_color(0xbb9af7),
    success: hex_to_color(0x9ece6a),
    warning: hex_to_color(0xe0af68),
    error: hex_to_color(0xf7768e),
    info: hex_to_color(0x7dcfff),
};

pub const CATPPUCCIN_MOCHA: ColorPalette = ColorPalette {
    name: "Catppuccin Mocha",
    background: hex_to_color(0x1e1e2e),
    foreground: hex_to_color(0xcdd6f4),
    foreground_dim: hex_to_color(0x6c7086),
    surface: hex_to_color(0x313244),
    border: hex_to_color(0x45475a),
    selection: hex_to_color(0x45475a),
    accent: hex_to_color(0x89b4fa),
    accent_secondary: hex_to_color(0xcba6f7),
    success: hex_to_color(0xa6e3a1),
    warning: hex_to_color(0xf9e2af),
    error: hex_to_color(0xf38ba8),
    info: hex_to_color(0x89dceb),
};

pub const DRACULA: ColorPalette = ColorPalette {
    name: "Dracula",
    background: hex_to_color(0x282a36),
    foreground: hex_to_color(0xf8f8f2),
    foreground_dim: hex_to_color(0x6272a4),
    surface: hex_to_color(0x44475a),
    border: hex_to_color(0x6272a4),
    selection: hex_to_color(0x44475a),
    accent: hex_to_color(0xbd93f9),
    accent_secondary: hex_to_color(0xff79c6),
    success: hex_to_color(0x50fa7b),
    warning: hex_to_color(0xf1fa8c),
    error: hex_to_color(0xff5555),
    info: hex_to_color(0x8be9fd),
};

pub const NORD: ColorPalette = ColorPalette {
    name: "Nord",
    background: hex_to_color(0x2e3440),
    foreground: hex_to_color(0xeceff4),
    foreground_dim: hex_to_color(0x4c566a),
    surface: hex_to_color(0x3b4252),
    border: hex_to_color(0x434c5e),
    selection: hex_to_color(0x434c5e),
    accent: hex_to_color(0x88c0d0),
    accent_secondary: hex_to_color(0x81a1c1),
    success: hex_to_color(0xa3be8c),
    warning: hex_to_color(0xebcb8b),
    error: hex_to_color(0xbf616a),
    info: hex_to_color(0x5e81ac),
};

pub const GRUVBOX_DARK: ColorPalette = ColorPalette {
    name: "Gruvbox Dark",
    background: hex_to_color(0x282828),
    foreground: hex_to_color(0xebdbb2),
    foreground_dim: hex_to_color(0x928374),
    surface: hex_to_color(0x3c3836),
    border: hex_to_color(0x504945),
    selection: hex_to_color(0x504945),
    accent: hex_to_color(0x83a598),
    accent_secondary: hex_to_color(0xd3869b),
    success: hex_to_color(0xb8bb26),
    warning: hex_to_color(0xfabd2f),
    error: hex_to_color(0xfb4934),
    info: hex_to_color(0x8ec07c),
};

pub const ALL: [ColorPalette; 5] = [TOKYO_NIGHT, CATPPUCCIN_MOCHA, DRACULA, NORD, GRUVBOX_DARK];
