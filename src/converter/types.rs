//! Converter data types.
//!
//! Contains the state the converter carries across a document:
//! - Rgb: a resolved 24-bit display color
//! - Color: tagged foreground/background value (unset, 3-bit index, true color)
//! - Attributes: the cumulative SGR attribute set

use std::fmt;

/// A resolved 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unchecked SGR parameters, saturating each channel at 255.
    pub fn saturating(r: u32, g: u32, b: u32) -> Self {
        let channel = |v: u32| v.min(u32::from(u8::MAX)) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Packed `0xRRGGBB` value.
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// CSS hex notation, always lower-case (`#rrggbb`).
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Foreground or background color as tracked by the converter.
///
/// `Indexed` keeps the 3-bit slot unresolved: foreground brightness depends on
/// the bold flag at render time. Colors set through the 256-color or 24-bit
/// forms are resolved immediately and stored as `TrueColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Unset,
    Indexed(u8),
    TrueColor(Rgb),
}

impl Color {
    pub fn is_set(self) -> bool {
        self != Color::Unset
    }
}

/// Cumulative SGR attribute state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub negative: bool,
    pub conceal: bool,
    pub crossout: bool,
}

impl Attributes {
    /// Return every field to its construction default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any color or flag is active, i.e. text needs a style wrapper.
    pub fn has_style(&self) -> bool {
        self.fg.is_set()
            || self.bg.is_set()
            || self.bold
            || self.faint
            || self.italic
            || self.underline
            || self.blink
            || self.negative
            || self.conceal
            || self.crossout
    }
}
