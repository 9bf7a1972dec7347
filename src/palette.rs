//! Light/dark color palettes.
//!
//! A theme always resolves to exactly one of two static palettes; there is no runtime
//! preference detection and no open string-keyed lookup.

use crate::foundation::core::Rgba8;

/// Visual theme variant of a preview image.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Catppuccin Latte.
    #[default]
    Light,
    /// Catppuccin Mocha.
    Dark,
}

impl Theme {
    /// Both variants in enumeration order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The palette this theme selects.
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color roles for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Card background.
    pub base: Rgba8,
    /// Primary text.
    pub text: Rgba8,
    /// Secondary text.
    pub subtext: Rgba8,
    /// Primary accent.
    pub blue: Rgba8,
    /// Secondary accent.
    pub mauve: Rgba8,
    /// Divider lines.
    pub surface: Rgba8,
}

impl Palette {
    /// Every role, in declaration order.
    pub fn colors(&self) -> [Rgba8; 6] {
        [
            self.base,
            self.text,
            self.subtext,
            self.blue,
            self.mauve,
            self.surface,
        ]
    }

    /// `true` when `c` matches one of the roles, ignoring alpha.
    pub fn contains_rgb(&self, c: Rgba8) -> bool {
        self.colors()
            .iter()
            .any(|p| p.r == c.r && p.g == c.g && p.b == c.b)
    }
}

/// Catppuccin Latte.
pub static LIGHT: Palette = Palette {
    base: Rgba8::rgb(0xef, 0xf1, 0xf5),
    text: Rgba8::rgb(0x4c, 0x4f, 0x69),
    subtext: Rgba8::rgb(0x6c, 0x6f, 0x85),
    blue: Rgba8::rgb(0x1e, 0x66, 0xf5),
    mauve: Rgba8::rgb(0x7c, 0x3a, 0xed),
    surface: Rgba8::rgb(0xcc, 0xd0, 0xda),
};

/// Catppuccin Mocha.
pub static DARK: Palette = Palette {
    base: Rgba8::rgb(0x1e, 0x1e, 0x2e),
    text: Rgba8::rgb(0xcd, 0xd6, 0xf4),
    subtext: Rgba8::rgb(0xa6, 0xad, 0xc8),
    blue: Rgba8::rgb(0x89, 0xb4, 0xfa),
    mauve: Rgba8::rgb(0xcb, 0xa6, 0xf7),
    surface: Rgba8::rgb(0x31, 0x32, 0x44),
};

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
