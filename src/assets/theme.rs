/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// Build from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, as used in SVG paint attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors a theme resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ThemePalette {
    /// Outline color for empty seats.
    pub base: Color,
    /// Fill color for occupied seats.
    pub primary: Color,
    /// Accent color, used by host chrome.
    pub secondary: Color,
}

/// UI theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Preference store default (stored as `"blue"`).
    #[default]
    Default,
    /// Dark UI.
    Dark,
    /// Light UI.
    Light,
}

const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
const CYAN: Color = Color::rgb(0x00, 0xC9, 0xE4);
const BLUE: Color = Color::rgb(0x3B, 0x82, 0xF6);
const LIME: Color = Color::rgb(0x84, 0xCC, 0x16);

impl Theme {
    /// Every theme.
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Dark, Theme::Light];

    /// Resolve a preference-store key. Unknown keys fall back to [`Theme::Default`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            _ => Theme::Default,
        }
    }

    /// Palette lookup.
    pub const fn palette(self) -> ThemePalette {
        match self {
            Theme::Default => ThemePalette {
                base: WHITE,
                primary: CYAN,
                secondary: LIME,
            },
            Theme::Dark => ThemePalette {
                base: WHITE,
                primary: BLUE,
                secondary: LIME,
            },
            Theme::Light => ThemePalette {
                base: BLACK,
                primary: BLUE,
                secondary: LIME,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/theme.rs"]
mod tests;
