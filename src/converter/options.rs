//! Converter configuration.

/// Default foreground used when no SGR color is active.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
/// Default background used when no SGR color is active.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

/// Options consumed by [`LineConverter`](super::LineConverter).
///
/// Built once by the caller and owned by the converter for its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterOptions {
    /// Gamma applied to every resolved color. `1.0` leaves colors untouched.
    pub gamma: f64,
    /// CSS color of plain text; `color:` is omitted when it matches.
    pub text_color: String,
    /// CSS color of the page; `background-color:` is omitted when it matches.
    pub background_color: String,
    /// Pass control bytes through literally instead of as `^X`.
    pub suppress_control_escapes: bool,
    /// Flush the sink after every converted line.
    pub auto_flush: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            suppress_control_escapes: false,
            auto_flush: false,
        }
    }
}
