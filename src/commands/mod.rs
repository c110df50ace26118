//! Command handlers for the a2h CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod convert;

use anyhow::Result;
use std::path::Path;

use a2h::Config;

/// Load configuration from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
