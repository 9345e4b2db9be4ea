//! The interactive prompt.

use std::io::{BufRead, Write};

use log::warn;

use crate::cli::output::write_outcome;
use crate::config::{ConfigStore, Configuration};
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::query::{QueryEngine, SearchMode};

/// Printed when the prompt starts.
pub const BANNER: &str = r#"Stanza: search Shakespeare's sonnets.
Type a query, or :help for commands."#;

/// Printed by `:help`.
pub const HELP: &str = r#"Commands:
  :help                  Show this help
  :highlight on|off      Toggle highlighting of matches
  :search-mode AND|OR    Require all words (AND) or any word (OR)
  :quit                  Exit
Anything else is a query: whitespace-separated words, matched case-insensitively."#;

const HIGHLIGHT_USAGE: &str = "Usage: :highlight on|off";
const SEARCH_MODE_USAGE: &str = "Usage: :search-mode AND|OR";

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line.
    Empty,
    /// `:quit`
    Quit,
    /// `:help`
    Help,
    /// `:highlight on|off`
    Highlight(bool),
    /// `:search-mode AND|OR`
    SetSearchMode(SearchMode),
    /// A recognized command with bad arguments; carries the usage line.
    Usage(&'static str),
    /// Any other `:` command.
    Unknown(String),
    /// A search query.
    Query(String),
}

impl ReplCommand {
    /// Classify a line of input.
    pub fn parse(line: &str) -> Self {
        let raw = line.trim();
        if raw.is_empty() {
            return ReplCommand::Empty;
        }
        if !raw.starts_with(':') {
            return ReplCommand::Query(raw.to_string());
        }

        let parts: Vec<&str> = raw.split_whitespace().collect();
        match parts.as_slice() {
            [":quit"] => ReplCommand::Quit,
            [":help"] => ReplCommand::Help,
            [":highlight", rest @ ..] => match rest {
                [arg] if arg.eq_ignore_ascii_case("on") => ReplCommand::Highlight(true),
                [arg] if arg.eq_ignore_ascii_case("off") => ReplCommand::Highlight(false),
                _ => ReplCommand::Usage(HIGHLIGHT_USAGE),
            },
            [":search-mode", rest @ ..] => match rest {
                [arg] => arg
                    .parse()
                    .map(ReplCommand::SetSearchMode)
                    .unwrap_or(ReplCommand::Usage(SEARCH_MODE_USAGE)),
                _ => ReplCommand::Usage(SEARCH_MODE_USAGE),
            },
            _ => ReplCommand::Unknown(raw.to_string()),
        }
    }
}

/// State of an interactive session.
pub struct Repl<'a> {
    engine: &'a QueryEngine,
    store: ConfigStore,
    config: Configuration,
    highlighter: Highlighter,
}

impl<'a> Repl<'a> {
    /// Create a session over `engine`, persisting settings through `store`.
    pub fn new(engine: &'a QueryEngine, store: ConfigStore, config: Configuration) -> Self {
        Repl {
            engine,
            store,
            config,
            highlighter: Highlighter::default(),
        }
    }

    /// Read commands from `input` until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "\nBye.")?;
                return Ok(());
            }

            if !self.handle(ReplCommand::parse(&line), out)? {
                return Ok(());
            }
        }
    }

    /// Execute one command. Returns `false` when the session should end.
    pub fn handle<W: Write>(&mut self, command: ReplCommand, out: &mut W) -> Result<bool> {
        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                writeln!(out, "Bye.")?;
                return Ok(false);
            }
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Highlight(on) => {
                self.config.highlight = on;
                writeln!(out, "Highlighting {}", if on { "ON" } else { "OFF" })?;
                self.persist(out)?;
            }
            ReplCommand::SetSearchMode(mode) => {
                self.config.search_mode = mode;
                writeln!(out, "Search mode set to {mode}")?;
                self.persist(out)?;
            }
            ReplCommand::Usage(usage) => writeln!(out, "{usage}")?,
            ReplCommand::Unknown(_) => writeln!(out, "Unknown command. Type :help for commands.")?,
            ReplCommand::Query(raw) => {
                let outcome = self.engine.query(&raw, self.config.search_mode);
                let highlighter = self.config.highlight.then_some(&self.highlighter);
                write_outcome(out, &outcome, highlighter)?;
            }
        }
        Ok(true)
    }

    fn persist<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Err(e) = self.store.save(&self.config) {
            warn!("{e}");
            writeln!(out, "Could not save settings: {e}")?;
        }
        Ok(())
    }
}
