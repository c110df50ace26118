//! HTML document shell.
//!
//! The converter only produces body markup; the header carries the page
//! colors and the CSS for line containers (`.l`) and blinking text.

use std::io::{self, Write};

/// Values substituted into the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentParams {
    pub title: String,
    pub background_color: String,
    pub text_color: String,
    pub font_size: String,
}

impl Default for DocumentParams {
    fn default() -> Self {
        Self {
            title: "A2H".to_string(),
            background_color: crate::converter::DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: crate::converter::DEFAULT_TEXT_COLOR.to_string(),
            font_size: "10pt".to_string(),
        }
    }
}

/// Escape text for use in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn write_header<W: Write>(w: &mut W, params: &DocumentParams) -> io::Result<()> {
    write!(
        w,
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
    <title>{title}</title>
    <style>
body{{
  background-color:{background};
  color:{text};
}}
.l{{
  font-size:{font_size};
  font-family:monospace;
  white-space:pre;
  min-height:1em;
}}
.blink{{
  animation:a2h-blink 1s step-start infinite;
}}
@keyframes a2h-blink{{
  50%{{visibility:hidden;}}
}}
    </style>
  </head>
<body>
"#,
        title = escape_html(&params.title),
        background = params.background_color,
        text = params.text_color,
        font_size = params.font_size,
    )
}

pub fn write_footer<W: Write>(w: &mut W, rows: usize) -> io::Result<()> {
    write!(w, "\n<!-- {} rows -->\n</body>\n</html>\n", rows)
}
