//! Interactive prompt for the calculator

use crate::commands::Operation;
use crate::session::{Flow, Session};
use anyhow::{anyhow, Context, Result};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const PROMPT: &str = "setcalc> ";

/// Prompt options
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Print the welcome banner
    pub banner: bool,
    /// Echo every received line as `> line`
    pub echo: bool,
    /// File to load prompt history from and save it to
    pub history: Option<PathBuf>,
}

/// Welcome text listing every command.
pub fn banner() -> String {
    let width = Operation::ALL
        .iter()
        .map(|op| op.usage().len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Set calculator. Sets are SETA to SETF, members are 0-127.\n");
    text.push_str("Commands:\n");
    for op in Operation::ALL {
        text.push_str(&format!(
            "  {:<width$}  {}\n",
            op.usage(),
            op.description(),
            width = width
        ));
    }
    text.push_str("Enter stop to exit.");
    text
}

/// Run the prompt until `stop` is accepted.
///
/// End of input before `stop` is an error.
pub fn run(session: &mut Session, config: &ReplConfig) -> Result<()> {
    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(false)
        .edit_mode(EditMode::Emacs)
        .build();
    let mut rl = DefaultEditor::with_config(rl_config).context("Failed to set up the prompt")?;

    if let Some(path) = &config.history {
        if rl.load_history(path).is_err() {
            debug!(target: "repl", path = %path.display(), "no previous history");
        }
    }

    if config.banner {
        println!("{}", banner());
    }

    let result = loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        warn!(target: "repl", error = %e, "failed to record history");
                    }
                }
                if config.echo {
                    session.echo(&line);
                }
                if session.feed(&line) == Flow::Stop {
                    break Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => {
                debug!(target: "repl", "interrupted");
            }
            Err(ReadlineError::Eof) => break Err(anyhow!("Missing stop command")),
            Err(e) => break Err(anyhow!(e).context("Failed to read input")),
        }
    };

    if let Some(path) = &config.history {
        if let Err(e) = rl.save_history(path) {
            warn!(target: "repl", path = %path.display(), error = %e, "failed to save history");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_every_command() {
        let text = banner();
        for op in Operation::ALL {
            assert!(text.contains(&op.usage()), "missing {}", op);
            assert!(text.contains(&op.description()), "missing {}", op);
        }
        assert!(text.ends_with("Enter stop to exit."));
    }

    #[test]
    fn test_banner_columns_align() {
        let text = banner();
        let columns: Vec<usize> = text
            .lines()
            .filter(|line| line.starts_with("  "))
            .map(|line| {
                let usage = line.trim_start();
                let op = Operation::ALL
                    .into_iter()
                    .find(|op| usage.starts_with(&op.usage()))
                    .unwrap();
                line.find(&op.description()).unwrap()
            })
            .collect();
        assert_eq!(columns.len(), Operation::ALL.len());
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_default_config() {
        let config = ReplConfig::default();
        assert!(!config.banner);
        assert!(!config.echo);
        assert!(config.history.is_none());
    }
}
