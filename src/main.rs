//! a2h - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use a2h::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    a2h::logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Completions { shell }) => commands::completions::handle::<Cli>(shell),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show { config } => commands::config::handle_show(config.as_deref()),
            ConfigCommands::Init { config } => commands::config::handle_init(config.as_deref()),
        },
        None => commands::convert::handle(&cli.convert),
    }
}
