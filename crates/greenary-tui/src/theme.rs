use greenary_core::ThemePreference;
use ratatui::style::Color;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Storefront palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,
    pub green: Color,
    /// Follows the active hero variant
    pub accent: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg0: Color::Rgb(0xf9, 0xf7, 0xf2),
            bg1: Color::Rgb(0xef, 0xeb, 0xe1),
            bg2: Color::Rgb(0xdf, 0xd9, 0xcb),
            fg0: Color::Rgb(0x2b, 0x2a, 0x26),
            fg1: Color::Rgb(0x45, 0x43, 0x3d),
            grey0: Color::Rgb(0xa8, 0xa2, 0x94),
            grey1: Color::Rgb(0x7a, 0x75, 0x69),
            green: Color::Rgb(0x2e, 0x7d, 0x32),
            accent: Color::Rgb(0x8d, 0x6e, 0x63),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg0: Color::Rgb(0x14, 0x17, 0x13),
            bg1: Color::Rgb(0x1e, 0x22, 0x1c),
            bg2: Color::Rgb(0x2c, 0x31, 0x29),
            fg0: Color::Rgb(0xec, 0xe8, 0xdc),
            fg1: Color::Rgb(0xc9, 0xc4, 0xb5),
            grey0: Color::Rgb(0x5a, 0x5f, 0x55),
            grey1: Color::Rgb(0x8a, 0x8e, 0x82),
            green: Color::Rgb(0x81, 0xc7, 0x84),
            accent: Color::Rgb(0xd4, 0xa5, 0x3c),
        }
    }

    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Replace the accent with a site colour, keeping the current one if it does not parse
    pub fn set_accent(&mut self, hex: &str) {
        match parse_hex_color(hex) {
            Some(color) => self.accent = color,
            None => tracing::warn!("Ignoring invalid accent colour '{}'", hex),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#d4a53c").unwrap();
        assert!(matches!(color, Color::Rgb(0xd4, 0xa5, 0x3c)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#€€").is_none());
    }

    #[test]
    fn test_accent_keeps_previous_on_garbage() {
        let mut theme = Theme::dark();
        theme.set_accent("#8D6E63");
        assert!(matches!(theme.accent, Color::Rgb(0x8d, 0x6e, 0x63)));
        theme.set_accent("brown");
        assert!(matches!(theme.accent, Color::Rgb(0x8d, 0x6e, 0x63)));
    }
}
