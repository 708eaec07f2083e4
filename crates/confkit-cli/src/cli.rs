//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// confkit - Read and edit ini, JSON, YAML and TOML configuration files
#[derive(Parser, Debug)]
#[command(name = "confkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Adapter to parse with (defaults to the file extension)
    #[arg(short, long, global = true, env = "CONFKIT_ADAPTER")]
    pub adapter: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the value stored at a key
    ///
    /// Examples:
    ///   confkit get app.conf db::host
    ///   confkit get app.yaml hosts --type strings
    Get {
        /// Configuration file
        file: PathBuf,

        /// Key, optionally `section::key`
        key: String,

        /// How to read the value
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
    },

    /// Set a key and save the file
    Set {
        /// Configuration file
        file: PathBuf,

        /// Key, optionally `section::key`
        key: String,

        /// New value
        value: String,

        /// Write to this file instead of updating in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every key of a section
    Section {
        /// Configuration file
        file: PathBuf,

        /// Section name
        section: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List registered adapters
    Adapters,
}

/// Typed accessor used by `get`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Strings,
    Int,
    Int64,
    Bool,
    Float,
    Raw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_with_type() {
        let cli = Cli::try_parse_from(["confkit", "get", "app.conf", "db::port", "-t", "int"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Get {
                file: PathBuf::from("app.conf"),
                key: "db::port".into(),
                value_type: ValueType::Int,
            }
        );
    }

    #[test]
    fn test_parse_global_adapter_after_subcommand() {
        let cli = Cli::try_parse_from(["confkit", "section", "app", "db", "--adapter", "ini"]).unwrap();
        assert_eq!(cli.adapter.as_deref(), Some("ini"));
    }

    #[test]
    fn test_parse_requires_command() {
        assert!(Cli::try_parse_from(["confkit"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
