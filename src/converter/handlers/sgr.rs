//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequences for text styling:
//! - Attributes (bold, faint, italic, underline, blink, negative, conceal, crossout)
//! - 3-bit colors, kept as palette slots until render time
//! - 256-color and 24-bit colors, resolved to RGB on decode

use std::io::{self, Write};

use tracing::trace;

use super::super::palette::indexed_color;
use super::super::params::{ParamCursor, SgrParams};
use super::super::types::{Attributes, Color, Rgb};
use super::super::LineConverter;

impl<W: Write> LineConverter<W> {
    /// Handle SGR - CSI m. Updates the attribute state, then re-renders the
    /// style wrapper.
    pub(crate) fn handle_sgr(&mut self, body: &[u8]) -> io::Result<()> {
        let params = SgrParams::parse(body);
        apply_sgr(&mut self.attrs, &params);
        self.start_span_if_needed()
    }
}

/// Apply every code in `params` to `attrs`, left to right.
///
/// Unknown codes are ignored. Extended colors (38/48) consume their trailing
/// parameters; a selector other than 5 or 2 consumes nothing further.
pub fn apply_sgr(attrs: &mut Attributes, params: &SgrParams) {
    let mut cursor = params.cursor();

    while let Some(code) = cursor.next_code() {
        match code {
            0 => attrs.reset(),
            1 => attrs.bold = true,
            2 => attrs.faint = true,
            3 => attrs.italic = true,
            4 => attrs.underline = true,
            5 => attrs.blink = true,
            7 => attrs.negative = true,
            8 => attrs.conceal = true,
            9 => attrs.crossout = true,
            21 => attrs.bold = false,
            22 => {
                attrs.bold = false;
                attrs.faint = false;
            }
            23 => attrs.italic = false,
            24 => attrs.underline = false,
            25 => attrs.blink = false,
            27 => attrs.negative = false,
            28 => attrs.conceal = false,
            29 => attrs.crossout = false,
            30..=37 => attrs.fg = Color::Indexed((code - 30) as u8),
            40..=47 => attrs.bg = Color::Indexed((code - 40) as u8),
            // Bright ranges select the same slots; brightness comes from bold
            90..=97 => attrs.fg = Color::Indexed((code - 90) as u8),
            100..=107 => attrs.bg = Color::Indexed((code - 100) as u8),
            38 => {
                if let Some(color) = parse_extended_color(&mut cursor) {
                    attrs.fg = color;
                }
            }
            48 => {
                if let Some(color) = parse_extended_color(&mut cursor) {
                    attrs.bg = color;
                }
            }
            _ => {}
        }
    }
}

/// Parse the tail of a 38/48 code: `5;N` (256-color) or `2;R;G;B` (24-bit).
///
/// The selector is only consumed together with its full tail. A truncated
/// tail leaves the cursor on the selector, which is then decoded as a code.
fn parse_extended_color(cursor: &mut ParamCursor<'_>) -> Option<Color> {
    let width = match cursor.peek()? {
        5 => 2,
        2 => 4,
        other => {
            trace!(selector = other, "Unknown extended color selector");
            return None;
        }
    };

    match cursor.consume(width) {
        Some(&[5, index]) => Some(Color::TrueColor(indexed_color(index))),
        Some(&[2, r, g, b]) => Some(Color::TrueColor(Rgb::saturating(r, g, b))),
        _ => {
            trace!(
                remaining = cursor.remaining(),
                "Truncated extended color"
            );
            None
        }
    }
}
