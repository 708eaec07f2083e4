//! confkit CLI
//!
//! Reads and edits INI, JSON, YAML and TOML configuration files through the
//! adapter registry.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use confkit_core::Registry;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let registry = confkit_adapters::registry();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(&mut out, &registry, cli.adapter.as_deref(), cli.command)?;
    out.flush()?;
    Ok(())
}

fn execute_command(
    out: &mut dyn Write,
    registry: &Registry,
    adapter: Option<&str>,
    cmd: Commands,
) -> Result<()> {
    match cmd {
        Commands::Get {
            file,
            key,
            value_type,
        } => commands::run_get(out, registry, adapter, &file, &key, value_type),
        Commands::Set {
            file,
            key,
            value,
            output,
        } => {
            commands::run_set(registry, adapter, &file, &key, &value, output.as_deref())?;
            let target = output.as_ref().unwrap_or(&file);
            writeln!(
                out,
                "{} {} in {}",
                "Set".green().bold(),
                key.cyan(),
                target.display()
            )?;
            Ok(())
        }
        Commands::Section {
            file,
            section,
            json,
        } => commands::run_section(out, registry, adapter, &file, &section, json),
        Commands::Adapters => {
            writeln!(out, "{}", "Registered adapters".bold())?;
            commands::run_adapters(out, registry)
        }
    }
}
