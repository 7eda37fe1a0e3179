//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloverlog", version, about = "Append delimited log lines to a file")]
pub struct Cli {
    /// Path to the INI config (defaults to $CLOVERLOG_CONFIG or ./cloverlogger.conf)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level on stderr (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append one line tagged TAG with the given values
    Write {
        /// Free-form tag (level or category)
        tag: String,
        /// Values joined with the separator
        args: Vec<String>,
        /// Override the destination file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Override the field separator
        #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
        separator: Option<String>,
        /// Source file to attribute the line to (e.g. "$0")
        #[arg(long, value_name = "FILE", default_value = "-")]
        caller_file: String,
        /// Function to attribute the line to (e.g. "${FUNCNAME[0]}")
        #[arg(long, value_name = "NAME", default_value = "-")]
        caller_function: String,
        /// Line number to attribute the line to (e.g. "$LINENO")
        #[arg(long, value_name = "N", default_value_t = 0)]
        caller_line: u32,
    },
    /// Print the effective configuration
    Config {
        /// Print as JSON instead of key=value
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
}
