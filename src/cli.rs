//! CLI definitions for a2h
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::config::Config;

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "a2h")]
#[command(about = "Convert terminal output with ANSI escape sequences into HTML")]
#[command(long_about = "a2h - convert terminal output with ANSI escape sequences into HTML.

Reads the given files in order (or stdin when none are given, or for '-')
and writes one HTML document to stdout. Colors and text attributes set with
SGR sequences become inline styles; cursor movement and other control
sequences are dropped.

EXAMPLES:
    cargo build --color=always 2>&1 | a2h > build.html
    a2h --title \"CI log\" --bg-color '#1e1e1e' job.log -o job.html
    make 2>&1 | a2h --auto-flush | tee build.html

Defaults can be stored in ~/.config/a2h/config.toml (see 'a2h config show').")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options for the default conversion mode.
#[derive(Args, Debug, Default, Clone)]
pub struct ConvertArgs {
    /// Input files ('-' for stdin; stdin when omitted)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/a2h/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Gamma value for RGB conversion
    #[arg(long)]
    pub gamma: Option<f64>,

    /// HTML title
    #[arg(long)]
    pub title: Option<String>,

    /// Background color
    #[arg(long, value_name = "COLOR")]
    pub bg_color: Option<String>,

    /// Default text color
    #[arg(long, value_name = "COLOR")]
    pub text_color: Option<String>,

    /// Font size
    #[arg(long, value_name = "SIZE")]
    pub font_size: Option<String>,

    /// Flush output after every line
    #[arg(long)]
    pub auto_flush: bool,

    /// Don't convert control characters to ^X notation
    #[arg(long)]
    pub no_convert_controls: bool,
}

impl ConvertArgs {
    /// Layer command-line values over `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(gamma) = self.gamma {
            config.render.gamma = gamma;
        }
        if let Some(ref color) = self.bg_color {
            config.render.background_color = color.clone();
        }
        if let Some(ref color) = self.text_color {
            config.render.text_color = color.clone();
        }
        if let Some(ref title) = self.title {
            config.document.title = title.clone();
        }
        if let Some(ref size) = self.font_size {
            config.document.font_size = size.clone();
        }
        if self.auto_flush {
            config.output.auto_flush = true;
        }
        if self.no_convert_controls {
            config.render.convert_controls = false;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    a2h completions bash > ~/.local/share/bash-completion/completions/a2h
    a2h completions zsh > ~/.zfunc/_a2h")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "Inspect or create the configuration file.

Configuration is stored in ~/.config/a2h/config.toml and provides
defaults for every conversion option. Command-line flags override it.")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show {
        /// Read this file instead of ~/.config/a2h/config.toml
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Write a default configuration file if none exists
    Init {
        /// Write to this path instead of ~/.config/a2h/config.toml
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
