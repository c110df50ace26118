//! Config subcommands handler

use anyhow::Result;
use std::path::Path;

use a2h::Config;

use super::load_config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default configuration file unless one already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    if init_at(&path)? {
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
    }
    Ok(())
}

/// Create a default config at `path`. Returns false if the file already exists.
pub(crate) fn init_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    Config::default().save_to(path)?;
    Ok(true)
}
