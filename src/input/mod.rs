//! Input sources.
//!
//! Files are read in argument order, `-` means stdin, and no arguments at all
//! means stdin alone. Lines are delivered as raw bytes including their `\n`.

mod error;

pub use error::InputError;

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::{debug, warn};

/// One input to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map command-line arguments to sources.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Vec<InputSource> {
        if args.is_empty() {
            return vec![InputSource::Stdin];
        }
        args.iter()
            .map(|arg| match arg.as_ref() {
                "-" => InputSource::Stdin,
                path => InputSource::File(PathBuf::from(path)),
            })
            .collect()
    }

    /// Call `f` with every line of this source.
    ///
    /// A file that cannot be opened, or is a directory, is skipped with a
    /// warning and yields no lines.
    pub fn for_each_line<F>(&self, f: F) -> Result<(), InputError>
    where
        F: FnMut(&[u8]) -> Result<(), InputError>,
    {
        match self {
            InputSource::Stdin => {
                let stdin = io::stdin();
                read_lines(stdin.lock(), "<stdin>", f)
            }
            InputSource::File(path) => {
                if path.is_dir() {
                    warn!("Skipping directory {}...", path.display());
                    return Ok(());
                }
                let file = match File::open(path) {
                    Ok(file) => file,
                    Err(e) => {
                        warn!("Unable to open {}: {}", path.display(), e);
                        return Ok(());
                    }
                };
                read_lines(BufReader::new(file), &path.display().to_string(), f)
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "-"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read `reader` line by line, keeping each `\n` terminator.
///
/// A final line without a terminator is delivered as-is.
pub fn read_lines<R, F>(mut reader: R, name: &str, mut f: F) -> Result<(), InputError>
where
    R: BufRead,
    F: FnMut(&[u8]) -> Result<(), InputError>,
{
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| InputError::Read {
                name: name.to_string(),
                source,
            })?;
        if n == 0 {
            break;
        }
        count += 1;
        f(&buf)?;
    }
    debug!(name, lines = count, "Finished reading");
    Ok(())
}
