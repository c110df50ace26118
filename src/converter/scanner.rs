//! Byte scanner.
//!
//! Walks one line chunk left to right, writing escaped text and dispatching
//! escape sequences. Malformed input never aborts the scan: truncated or
//! unknown sequences are consumed and dropped.

use std::io::{self, Write};

use super::handlers::{log_truncated, log_unhandled_csi, log_unhandled_esc};
use super::LineConverter;

const BEL: u8 = 0x07;
const TAB: u8 = b'\t';
const LF: u8 = b'\n';
const CR: u8 = b'\r';
const ESC: u8 = 0x1b;

/// Final byte of a CSI sequence.
fn is_csi_final(b: u8) -> bool {
    (0x40..=0x7e).contains(&b)
}

impl<W: Write> LineConverter<W> {
    pub(crate) fn scan(&mut self, line: &[u8]) -> io::Result<()> {
        let mut i = 0;

        while i < line.len() {
            let b = line[i];
            i += 1;

            match b {
                b'&' => self.out.write_all(b"&amp;")?,
                b'<' => self.out.write_all(b"&lt;")?,
                b'>' => self.out.write_all(b"&gt;")?,
                BEL => {}
                CR if line.get(i) == Some(&LF) => {}
                CR | LF => {
                    self.close_line()?;
                    if i < line.len() {
                        self.open_line()?;
                    }
                }
                ESC => i = self.scan_escape(line, i)?,
                _ if b <= 31 && b != TAB && !self.options.suppress_control_escapes => {
                    self.out.write_all(&[b'^', b | 0x40])?;
                }
                _ => self.out.write_all(&[b])?,
            }
        }
        Ok(())
    }

    /// Handle the sequence after an ESC at `line[start - 1]`. Returns the index
    /// of the first byte after the sequence.
    fn scan_escape(&mut self, line: &[u8], start: usize) -> io::Result<usize> {
        let Some(&kind) = line.get(start) else {
            log_truncated("ESC", &[]);
            return Ok(start);
        };

        match kind {
            b'[' => {
                let body_start = start + 1;
                let Some(offset) = line[body_start..].iter().position(|&b| is_csi_final(b))
                else {
                    log_truncated("CSI", &line[body_start..]);
                    return Ok(line.len());
                };
                let end = body_start + offset;
                let body = &line[body_start..end];
                if line[end] == b'm' {
                    self.handle_sgr(body)?;
                } else {
                    log_unhandled_csi(line[end], body);
                }
                Ok(end + 1)
            }
            b']' => Ok(skip_osc(line, start + 1)),
            // Charset select: one designator byte follows
            b'(' => Ok((start + 2).min(line.len())),
            b'c' => {
                self.attrs.reset();
                self.close_span()?;
                Ok(start + 1)
            }
            other => {
                log_unhandled_esc(other);
                Ok(start + 1)
            }
        }
    }
}

/// Skip an OSC body through BEL or `ESC \`.
fn skip_osc(line: &[u8], mut i: usize) -> usize {
    loop {
        match line.get(i) {
            None => {
                log_truncated("OSC", &[]);
                return i;
            }
            Some(&BEL) => return i + 1,
            Some(&ESC) if line.get(i + 1) == Some(&b'\\') => return i + 2,
            Some(_) => i += 1,
        }
    }
}
