//! Convert command handler (the default mode)

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use a2h::cli::ConvertArgs;
use a2h::{render_document, InputSource};

use super::load_config;

/// Convert the inputs named in `args` into one HTML document.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ConvertArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply_to(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid option: {}", e))?;

    let sources = InputSource::from_args(&args.files);
    let out: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    render_document(&sources, &config, BufWriter::new(out))?;
    Ok(())
}
