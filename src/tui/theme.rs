use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Theme, UiConfig};

/// Concrete terminal colors for one display mode
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Palette {
            background: Color::Rgb(0xFA, 0xFA, 0xFA),
            text: Color::Rgb(0x33, 0x33, 0x33),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            highlight: Color::Rgb(0x6C, 0x4D, 0xF6),
            dim: Color::Rgb(0x8A, 0x8A, 0x8A),
            green: Color::Rgb(0x2E, 0x8B, 0x57),
            selection_bg: Color::Rgb(0xE6, 0xE0, 0xFF),
        }
    }

    pub fn dark() -> Self {
        Palette {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }

    /// Apply `name = "#RRGGBB"` overrides; unknown names and bad colors are skipped
    fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (key, value) in overrides {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "text" => self.text = color,
                    "text_bright" => self.text_bright = color,
                    "highlight" => self.highlight = color,
                    "dim" => self.dim = color,
                    "green" => self.green = color,
                    "selection_bg" => self.selection_bg = color,
                    _ => {}
                }
            }
        }
        self
    }
}

/// Both palettes, built once from config
#[derive(Debug, Clone, PartialEq)]
pub struct Palettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Palettes {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl Palettes {
    pub fn from_config(ui: &UiConfig) -> Self {
        Palettes {
            light: Palette::light().with_overrides(&ui.light),
            dark: Palette::dark().with_overrides(&ui.dark),
        }
    }

    pub fn for_theme(&self, theme: Theme) -> &Palette {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
