//! Escape sequence handlers.
//!
//! - sgr: decode `CSI ... m` bodies into attribute changes
//! - style: build the inline style wrapper for an attribute snapshot

pub mod sgr;
pub mod style;

use tracing::trace;

/// Log a discarded CSI sequence (anything not terminated by `m`).
pub fn log_unhandled_csi(action: u8, body: &[u8]) {
    trace!(
        action = %char::from(action),
        body = %String::from_utf8_lossy(body),
        "Discarded CSI sequence"
    );
}

/// Log a discarded two-byte ESC sequence.
pub fn log_unhandled_esc(byte: u8) {
    trace!(
        byte = byte,
        byte_char = %char::from(byte),
        "Discarded ESC sequence"
    );
}

/// Log a sequence cut off by the end of the line.
pub fn log_truncated(kind: &'static str, tail: &[u8]) {
    trace!(
        kind = kind,
        tail = %String::from_utf8_lossy(tail),
        "Truncated escape sequence"
    );
}
