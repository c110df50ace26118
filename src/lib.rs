//! a2h Library
//!
//! Converts terminal output containing ANSI/VT100 escape sequences into HTML,
//! keeping colors and text attributes as inline styles.

pub mod cli;
pub mod config;
pub mod converter;
pub mod document;
pub mod input;
pub mod logging;

pub use config::Config;
pub use converter::{ConverterOptions, LineConverter};
pub use document::{render_document, DocumentParams};
pub use input::{InputError, InputSource};
