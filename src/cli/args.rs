//! Command line argument parsing for the Stanza CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::CONFIG_FILE_NAME;
use crate::corpus::{CACHE_FILE_NAME, POETRYDB_URL};
use crate::query::SearchMode;

/// Stanza - literal substring search over a poem corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "stanza")]
#[command(about = "Search Shakespeare's sonnets for words, with AND/OR queries and highlighting")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StanzaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Corpus cache file (downloaded on first use)
    #[arg(
        long,
        value_name = "PATH",
        default_value = CACHE_FILE_NAME,
        env = "STANZA_CORPUS",
        global = true
    )]
    pub corpus: PathBuf,

    /// Configuration file
    #[arg(
        long,
        value_name = "PATH",
        default_value = CONFIG_FILE_NAME,
        env = "STANZA_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Corpus download URL
    #[arg(long, value_name = "URL", default_value = POETRYDB_URL, global = true)]
    pub url: String,

    /// Subcommand to execute (interactive mode when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl StanzaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The subcommand, defaulting to the interactive loop.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Repl)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the interactive search prompt
    Repl,

    /// Run a single query and exit
    Search(SearchArgs),
}

/// Arguments for a one-shot search
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SearchArgs {
    /// Query words
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// How words combine, AND or OR (overrides the configuration file)
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<SearchMode>,

    /// Highlight matches (overrides the configuration file)
    #[arg(long)]
    pub highlight: bool,

    /// Do not highlight matches (overrides the configuration file)
    #[arg(long, conflicts_with = "highlight")]
    pub no_highlight: bool,

    /// Search documents in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl SearchArgs {
    /// The query words joined back into one string.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }

    /// Highlight override, if any flag was given.
    pub fn highlight_override(&self) -> Option<bool> {
        match (self.highlight, self.no_highlight) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
