use bevy::prelude::*;

pub mod presets {
    use bevy::color::Color;

    /// Light red backdrop with dark letters (default)
    pub const BLUSH: Theme = Theme {
        background: Color::srgb(0.996, 0.792, 0.792),
        text_color: Color::srgb(0.067, 0.067, 0.067),
        font_size: 60.0,
        letter_gap: 8.0,
        cursor_size: 40.0,
        cursor_color: Color::BLACK,
        cursor_border: Color::srgb(0.898, 0.906, 0.922),
    };

    /// Dark backdrop, light letters, light cursor
    pub const MIDNIGHT: Theme = Theme {
        background: Color::srgb(0.043, 0.055, 0.094),
        text_color: Color::srgb(0.93, 0.93, 0.96),
        font_size: 60.0,
        letter_gap: 8.0,
        cursor_size: 40.0,
        cursor_color: Color::WHITE,
        cursor_border: Color::srgb(0.3, 0.3, 0.4),
    };

    /// Off-white page with ink letters and a hollow-looking cursor
    pub const PAPER: Theme = Theme {
        background: Color::srgb(0.98, 0.97, 0.94),
        text_color: Color::srgb(0.1, 0.1, 0.12),
        font_size: 60.0,
        letter_gap: 8.0,
        cursor_size: 40.0,
        cursor_color: Color::srgba(0.1, 0.1, 0.12, 0.25),
        cursor_border: Color::srgb(0.1, 0.1, 0.12),
    };

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Theme {
        pub background: Color,
        pub text_color: Color,
        /// Glyph size in logical pixels
        pub font_size: f32,
        /// Horizontal gap between letters in logical pixels
        pub letter_gap: f32,
        /// Cursor indicator diameter in logical pixels
        pub cursor_size: f32,
        pub cursor_color: Color,
        pub cursor_border: Color,
    }
}

pub use presets::Theme;

pub const DEFAULT_THEME: Theme = presets::BLUSH;

fn preset(name: &str) -> Option<Theme> {
    match name {
        "blush" => Some(presets::BLUSH),
        "midnight" => Some(presets::MIDNIGHT),
        "paper" => Some(presets::PAPER),
        _ => None,
    }
}

/// Resolve a style class string to a theme.
/// Classes are whitespace separated, like a CSS class list; the first known one wins.
pub fn theme_for_class(class: Option<&str>) -> Theme {
    let Some(class) = class else {
        return DEFAULT_THEME;
    };

    for name in class.split_whitespace() {
        if let Some(theme) = preset(name) {
            return theme;
        }
        warn!("Unknown style class '{}', ignoring", name);
    }

    DEFAULT_THEME
}
