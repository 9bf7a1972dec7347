use crate::foundation::error::{OgError, OgResult};

pub use kurbo::{RoundedRect, Shape};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The de facto social preview size, 1200x630.
    pub const OG: Canvas = Canvas {
        width: 1200,
        height: 630,
    };

    /// Width as layout units.
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    /// Height as layout units.
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> OgResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> OgResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| OgError::config(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(OgError::config("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(OgError::config(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Lowercase `#rrggbb`, alpha excluded.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a `0..=1` opacity.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// `true` when alpha is 255.
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

/// Pixel-space rectangle in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectPx {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl RectPx {
    /// Shrink by per-side insets, never producing negative sizes.
    pub fn inset(self, e: Edges<f32>) -> Self {
        Self {
            x: self.x + e.left,
            y: self.y + e.top,
            w: (self.w - e.left - e.right).max(0.0),
            h: (self.h - e.top - e.bottom).max(0.0),
        }
    }

    /// Rounded rectangle shape for painting, radius clamped to half the short side.
    pub fn rounded(self, radius: f32) -> RoundedRect {
        let r = f64::from(radius.max(0.0).min(self.w.min(self.h) / 2.0));
        RoundedRect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.w),
            f64::from(self.y + self.h),
            r,
        )
    }
}

/// Per-side values in CSS order semantics (top, right, bottom, left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges<T> {
    /// Top side.
    pub top: T,
    /// Right side.
    pub right: T,
    /// Bottom side.
    pub bottom: T,
    /// Left side.
    pub left: T,
}

impl<T: Copy> Edges<T> {
    /// Same value on all four sides.
    pub fn all(v: T) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// CSS two-value shorthand (`vertical horizontal`).
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl Edges<f32> {
    /// All sides zero.
    pub const ZERO: Edges<f32> = Edges {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Only the top side set.
    pub fn top_only(v: f32) -> Self {
        Self {
            top: v,
            ..Self::ZERO
        }
    }

    /// `true` when every side is finite and non-negative.
    pub fn is_valid_extent(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// `true` when all four sides are equal.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
