//! Document assembly.
//!
//! Drives a [`LineConverter`] over every line of every input source and wraps
//! the result in the HTML shell.

mod template;

pub use template::{escape_html, write_footer, write_header, DocumentParams};

use std::io::Write;

use tracing::{debug, info};

use crate::config::Config;
use crate::converter::LineConverter;
use crate::input::{InputError, InputSource};

/// Convert `sources` in order into one HTML document written to `out`.
///
/// Returns the number of rows emitted. Sources that cannot be opened are
/// skipped with a warning; read and write failures abort the run.
pub fn render_document<W: Write>(
    sources: &[InputSource],
    config: &Config,
    out: W,
) -> Result<usize, InputError> {
    let mut converter = LineConverter::new(out, config.converter_options());
    write_header(converter.get_mut(), &config.document_params())?;

    let mut first_line = true;
    for source in sources {
        debug!(source = %source, "Converting source");
        source.for_each_line(|line| {
            converter.convert_line(line, first_line)?;
            first_line = false;
            Ok(())
        })?;
    }

    converter.finish()?;
    let rows = converter.rows();
    write_footer(converter.get_mut(), rows)?;
    converter.get_mut().flush()?;

    info!(rows, sources = sources.len(), "Document written");
    Ok(rows)
}
