//! xtask - Build tasks for a2h
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use a2h::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for a2h")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // Neither flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn render_man(cmd: Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(cmd.clone(), &man_dir.join("a2h.1"))?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        render_man(
            subcommand.clone(),
            &man_dir.join(format!("a2h-{}.1", name)),
        )?;
    }

    Ok(())
}

/// Append an options table for `cmd` to `markdown`.
fn push_arguments(markdown: &mut String, cmd: &Command) {
    let visible = |a: &&Arg| {
        let id = a.get_id().as_str();
        !a.is_hide_set() && id != "help" && id != "version"
    };
    let positional: Vec<_> = cmd.get_positionals().filter(visible).collect();
    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_positional())
        .filter(visible)
        .collect();

    if !positional.is_empty() {
        markdown.push_str("### Arguments\n\n");
        for arg in positional {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!(
                "- `<{}>`: {}\n",
                arg.get_id().as_str().to_uppercase(),
                help
            ));
        }
        markdown.push('\n');
    }

    if !options.is_empty() {
        markdown.push_str("### Options\n\n");
        markdown.push_str("| Option | Description |\n");
        markdown.push_str("|--------|-------------|\n");
        for arg in options {
            let mut flag = String::new();
            if let Some(short) = arg.get_short() {
                flag.push_str(&format!("`-{}`, ", short));
            }
            if let Some(long) = arg.get_long() {
                flag.push_str(&format!("`--{}`", long));
            }
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!("| {} | {} |\n", flag, help));
        }
        markdown.push('\n');
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# a2h Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    markdown.push_str("## a2h\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
    push_arguments(&mut markdown, &cmd);

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## a2h {}\n\n", name));
        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }
        push_arguments(&mut markdown, subcommand);

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            markdown.push_str(&format!("### a2h {} {}\n\n", name, nested.get_name()));
            if let Some(about) = nested.get_about() {
                markdown.push_str(&format!("{}\n\n", about));
            }
            push_arguments(&mut markdown, nested);
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());
    Ok(())
}
