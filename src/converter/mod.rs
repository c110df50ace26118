//! ANSI to HTML line converter.
//!
//! Scans terminal output one line chunk at a time, tracks the cumulative SGR
//! attribute state and writes HTML: each line becomes a `<div class="l">`
//! container, and text under active attributes sits inside a single
//! `<span style="...">` wrapper describing the current attribute snapshot.
//!
//! Only SGR sequences change the output. Other CSI sequences, OSC strings,
//! charset selection and unknown ESC sequences are consumed and dropped; this
//! is not a terminal emulator.

mod handlers;
mod options;
mod palette;
mod params;
mod scanner;
mod types;


pub use handlers::sgr::apply_sgr;
pub use handlers::style::{span_open_tag, style_declarations};
pub use options::{ConverterOptions, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR};
pub use palette::{apply_gamma, basic_color, indexed_color, BRIGHT_COLORS, STANDARD_COLORS};
pub use params::{ParamCursor, SgrParams};
pub use types::{Attributes, Color, Rgb};

use std::io::{self, Write};

/// Stateful converter for one HTML document.
///
/// Attribute state persists across lines until an explicit reset
/// (`ESC[0m`, `ESC[m`, `ESC c`) or the first line of a document.
#[derive(Debug)]
pub struct LineConverter<W: Write> {
    /// Output sink, owned for the converter's lifetime
    out: W,
    options: ConverterOptions,
    /// Current SGR attributes
    attrs: Attributes,
    /// Whether a line container is open
    line_open: bool,
    /// Whether a style wrapper is open inside the line container
    span_open: bool,
    /// Line containers opened so far
    rows: usize,
}

impl<W: Write> LineConverter<W> {
    pub fn new(out: W, options: ConverterOptions) -> Self {
        Self {
            out,
            options,
            attrs: Attributes::default(),
            line_open: false,
            span_open: false,
            rows: 0,
        }
    }

    /// Convert one line chunk (normally ending in `\n`).
    ///
    /// `first_line` marks the first line of the document and resets the
    /// attribute state before scanning. The line container is always closed
    /// when this returns.
    pub fn convert_line(&mut self, line: &[u8], first_line: bool) -> io::Result<()> {
        if first_line {
            self.attrs.reset();
        }

        self.open_line()?;
        self.scan(line)?;
        self.close_line()?;

        if self.options.auto_flush {
            self.out.flush()?;
        }
        Ok(())
    }

    /// Close anything still open and flush the sink.
    pub fn finish(&mut self) -> io::Result<()> {
        self.close_line()?;
        self.out.flush()
    }

    /// Number of line containers emitted.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current attribute state.
    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Open a line container, then the wrapper for any active style.
    pub(crate) fn open_line(&mut self) -> io::Result<()> {
        if !self.line_open {
            self.out.write_all(b"<div class=\"l\">")?;
            self.line_open = true;
            self.rows += 1;
        }
        self.start_span_if_needed()
    }

    pub(crate) fn close_line(&mut self) -> io::Result<()> {
        self.close_span()?;
        if self.line_open {
            self.out.write_all(b"</div>\n")?;
            self.line_open = false;
        }
        Ok(())
    }

    pub(crate) fn close_span(&mut self) -> io::Result<()> {
        if self.span_open {
            self.out.write_all(b"</span>")?;
            self.span_open = false;
        }
        Ok(())
    }
}

impl LineConverter<Vec<u8>> {
    /// Convert a whole in-memory document to markup (without header/footer).
    pub fn convert_to_string(input: &[u8], options: ConverterOptions) -> String {
        let mut converter = LineConverter::new(Vec::new(), options);
        let mut first = true;
        for line in input.split_inclusive(|&b| b == b'\n') {
            // Writes to a Vec cannot fail
            let _ = converter.convert_line(line, first);
            first = false;
        }
        String::from_utf8_lossy(&converter.into_inner()).into_owned()
    }
}
