//! Command implementations for the Stanza CLI.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::repl::{BANNER, Repl};
use crate::config::{ConfigStore, Configuration};
use crate::corpus::{CorpusLoader, CorpusSource};
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::query::QueryEngine;

/// Execute a CLI command against stdin/stdout.
pub fn execute_command(args: StanzaArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    execute_command_with(args, stdin.lock(), &mut stdout)
}

/// Execute a CLI command with explicit input and output streams.
pub fn execute_command_with<R: BufRead, W: Write>(
    args: StanzaArgs,
    input: R,
    out: &mut W,
) -> Result<()> {
    let command = args.command();
    if command == Command::Repl && args.verbosity() > 0 {
        writeln!(out, "{BANNER}")?;
    }

    let store = ConfigStore::new(&args.config);
    let config = store.load();
    let engine = load_engine(&args, out)?;

    match command {
        Command::Repl => run_repl(&engine, store, config, input, out),
        Command::Search(search_args) => run_search(&engine, config, &search_args, &args, out),
    }
}

/// Load the corpus and report where it came from.
fn load_engine<W: Write>(args: &StanzaArgs, out: &mut W) -> Result<QueryEngine> {
    let loader = CorpusLoader::new(&args.corpus).with_url(args.url.as_str());
    let loaded = loader.load()?;

    if args.verbosity() > 0 && args.output_format == OutputFormat::Human {
        match loaded.source {
            CorpusSource::Cache => writeln!(out, "Loaded sonnets from cache.")?,
            CorpusSource::Remote => writeln!(out, "Downloaded sonnets from PoetryDB.")?,
        }
        writeln!(
            out,
            "Loaded {} sonnets.\nIt took {:.2} ms.",
            loaded.documents.len(),
            loaded.elapsed.as_secs_f64() * 1000.0
        )?;
    }

    let engine = QueryEngine::new(loaded.documents);
    if engine.is_empty() {
        warn!("Corpus {} contains no poems", args.corpus.display());
    }
    Ok(engine)
}

/// Run the interactive prompt until `:quit` or end of input.
fn run_repl<R: BufRead, W: Write>(
    engine: &QueryEngine,
    store: ConfigStore,
    config: Configuration,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!(
        "Starting prompt (highlight: {}, search mode: {})",
        config.highlight, config.search_mode
    );
    Repl::new(engine, store, config).run(input, out)
}

/// Run a single query, with command line flags overriding stored settings.
fn run_search<W: Write>(
    engine: &QueryEngine,
    mut config: Configuration,
    args: &SearchArgs,
    cli_args: &StanzaArgs,
    out: &mut W,
) -> Result<()> {
    if let Some(mode) = args.mode {
        config.search_mode = mode;
    }
    if let Some(highlight) = args.highlight_override() {
        config.highlight = highlight;
    }

    let raw = args.query_string();
    let outcome = if args.parallel {
        engine.query_parallel(&raw, config.search_mode)
    } else {
        engine.query(&raw, config.search_mode)
    };

    let highlighter = Highlighter::default();
    output_outcome(
        out,
        &outcome,
        cli_args.output_format,
        config.highlight.then_some(&highlighter),
        cli_args.pretty,
    )
}
