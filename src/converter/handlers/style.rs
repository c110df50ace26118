//! Style wrapper rendering.
//!
//! Turns an attribute snapshot into the opening `<span>` tag. Wrappers are never
//! patched: every change closes the current one and renders a fresh snapshot.

use std::io::{self, Write};

use super::super::options::ConverterOptions;
use super::super::palette::{apply_gamma, basic_color};
use super::super::types::{Attributes, Color};
use super::super::LineConverter;

impl<W: Write> LineConverter<W> {
    /// Close the current wrapper and open one for the current attributes,
    /// unless no attribute is active.
    pub(crate) fn start_span_if_needed(&mut self) -> io::Result<()> {
        self.close_span()?;
        if !self.line_open || !self.attrs.has_style() {
            return Ok(());
        }

        let tag = span_open_tag(&self.attrs, &self.options);
        self.out.write_all(tag.as_bytes())?;
        self.span_open = true;
        Ok(())
    }
}

/// Resolve a tracked color to a CSS color string.
///
/// `bright` only affects 3-bit palette slots.
fn resolve_color(color: Color, bright: bool, default: &str, gamma: f64) -> String {
    match color {
        Color::Unset => default.to_string(),
        Color::Indexed(index) => apply_gamma(basic_color(index, bright), gamma).to_hex(),
        Color::TrueColor(rgb) => apply_gamma(rgb, gamma).to_hex(),
    }
}

/// Build the `style` declarations for `attrs`, in fixed order.
pub fn style_declarations(attrs: &Attributes, options: &ConverterOptions) -> String {
    // Bold brightens the foreground only
    let mut fg = resolve_color(attrs.fg, attrs.bold, &options.text_color, options.gamma);
    let mut bg = resolve_color(
        attrs.bg,
        false,
        &options.background_color,
        options.gamma,
    );
    if attrs.negative {
        std::mem::swap(&mut fg, &mut bg);
    }
    if attrs.conceal {
        fg = bg.clone();
    }

    let mut style = String::new();
    if attrs.bold {
        style.push_str("font-weight:bold;");
    }
    if attrs.faint {
        style.push_str("opacity:0.5;");
    }
    if attrs.italic {
        style.push_str("font-style:italic;");
    }
    match (attrs.underline, attrs.crossout) {
        (true, true) => style.push_str("text-decoration:underline line-through;"),
        (true, false) => style.push_str("text-decoration:underline;"),
        (false, true) => style.push_str("text-decoration:line-through;"),
        (false, false) => {}
    }
    if !fg.eq_ignore_ascii_case(&options.text_color) {
        style.push_str(&format!("color:{};", fg));
    }
    if !bg.eq_ignore_ascii_case(&options.background_color) {
        style.push_str(&format!("background-color:{};", bg));
    }
    style
}

/// Full opening tag for a style wrapper.
pub fn span_open_tag(attrs: &Attributes, options: &ConverterOptions) -> String {
    let class = if attrs.blink { "class=\"blink\" " } else { "" };
    format!(
        "<span {}style=\"{}\">",
        class,
        style_declarations(attrs, options)
    )
}
