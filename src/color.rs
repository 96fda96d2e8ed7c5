//! RGBA colours for picker theming and skin-tone swatches.
//!
//! Colours are kept as 8-bit components because every consumer (CSS, GPU
//! vertex colours, terminal true colour) takes them in that form.
//!
//! ```
//! use emoji_kit::Rgba;
//!
//! let accent = Rgba::from_hex("#3b82f6").unwrap();
//! assert_eq!(accent.to_string(), "#3B82F6");
//! ```

use std::fmt;

/// RGBA colour with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from RGBA components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex colour string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => None,
        }
    }

    /// Return a copy with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if the colour is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// CSS `rgba()` notation.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            self.to_string()
        } else {
            let alpha = f32::from(self.a) / 255.0;
            format!("rgba({}, {}, {}, {alpha:.2})", self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        if self.is_opaque() {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}
