//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::converter::{ConverterOptions, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR};
use crate::document::DocumentParams;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Color and character rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Gamma applied to every emitted color
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Default text color (CSS)
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Default background color (CSS)
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Render control characters as `^X`
    #[serde(default = "default_convert_controls")]
    pub convert_controls: bool,
}

pub fn default_gamma() -> f64 {
    1.0
}

pub fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

pub fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

pub fn default_convert_controls() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gamma: default_gamma(),
            text_color: default_text_color(),
            background_color: default_background_color(),
            convert_controls: default_convert_controls(),
        }
    }
}

/// HTML document shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_font_size")]
    pub font_size: String,
}

pub fn default_title() -> String {
    "A2H".to_string()
}

pub fn default_font_size() -> String {
    "10pt".to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            font_size: default_font_size(),
        }
    }
}

/// Output behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Flush after every line (useful when piping a live build)
    #[serde(default)]
    pub auto_flush: bool,
}

impl Config {
    /// Check values that would otherwise produce broken markup.
    pub fn validate(&self) -> Result<(), String> {
        let gamma = self.render.gamma;
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(format!("render.gamma must be a positive number, got {}", gamma));
        }
        validate_css_value("render.text_color", &self.render.text_color)?;
        validate_css_value("render.background_color", &self.render.background_color)?;
        validate_css_value("document.font_size", &self.document.font_size)?;
        Ok(())
    }

    /// Options for the line converter.
    pub fn converter_options(&self) -> ConverterOptions {
        ConverterOptions {
            gamma: self.render.gamma,
            text_color: self.render.text_color.clone(),
            background_color: self.render.background_color.clone(),
            suppress_control_escapes: !self.render.convert_controls,
            auto_flush: self.output.auto_flush,
        }
    }

    /// Parameters for the document header.
    pub fn document_params(&self) -> DocumentParams {
        DocumentParams {
            title: self.document.title.clone(),
            background_color: self.render.background_color.clone(),
            text_color: self.render.text_color.clone(),
            font_size: self.document.font_size.clone(),
        }
    }
}

/// CSS values are written into `style` attributes and the stylesheet verbatim.
fn validate_css_value(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if let Some(c) = value.chars().find(|c| matches!(c, '"' | '<' | '>' | ';' | '{' | '}')) {
        return Err(format!("{} contains invalid character '{}'", field, c));
    }
    Ok(())
}
