use ratatui::style::Color;

use crate::model::{Priority, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub header: Color,
    pub card: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x00, 0x00, 0x00),
            header: Color::Rgb(0x1C, 0x1C, 0x1E),
            card: Color::Rgb(0x1C, 0x1C, 0x1E),
            text: Color::Rgb(0xD1, 0xD1, 0xD6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x0A, 0x84, 0xFF),
            dim: Color::Rgb(0x8E, 0x8E, 0x93),
            red: Color::Rgb(0xFF, 0x45, 0x3A),
            yellow: Color::Rgb(0xFF, 0x9F, 0x0A),
            green: Color::Rgb(0x30, 0xD1, 0x58),
            blue: Color::Rgb(0x0A, 0x84, 0xFF),
            selection_bg: Color::Rgb(0x2C, 0x2C, 0x2E),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        if let Some(color) = parse_hex_color(&ui.header_color) {
            theme.header = color;
        }

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "header" => theme.header = color,
                "card" => theme.card = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "blue" => theme.blue = color,
                "selection_bg" => theme.selection_bg = color,
                _ => tracing::warn!(key = %key, "unknown color key"),
            }
        }

        theme
    }

    /// Badge color for a priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.dim,
            Priority::Medium => self.yellow,
            Priority::High => self.red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        // six bytes, but not six characters
        assert_eq!(parse_hex_color("#aé€"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn header_color_comes_from_config() {
        let ui = UiConfig {
            header_color: "#102030".into(),
            ..Default::default()
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.header, Color::Rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn non_ascii_colors_fall_back_to_defaults() {
        let mut ui = UiConfig {
            header_color: "#aé€".into(),
            ..Default::default()
        };
        ui.colors.insert("card".into(), "#ééé".into());
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.header, Theme::default().header);
        assert_eq!(theme.card, Theme::default().card);
    }

    #[test]
    fn color_overrides_apply() {
        let mut ui = UiConfig::default();
        ui.colors.insert("red".into(), "#010203".into());
        ui.colors.insert("bogus".into(), "#010203".into());
        ui.colors.insert("green".into(), "nope".into());
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.red, Color::Rgb(1, 2, 3));
        assert_eq!(theme.green, Theme::default().green);
    }
}
