use clap::Parser;
use setcalc::{ReplConfig, ScriptConfig};
use std::path::PathBuf;

/// Calculator over sets of integers in the range 0-127
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(color = clap::ColorChoice::Auto)]
pub(crate) struct Cli {
    /// Run commands from a script file instead of the prompt
    #[arg(short, long, value_name = "FILE")]
    pub(crate) script: Option<PathBuf>,

    /// Abort the script on the first rejected command
    #[arg(long, requires = "script")]
    pub(crate) strict: bool,

    /// Do not print the welcome banner
    #[arg(short, long, conflicts_with = "script")]
    pub(crate) quiet: bool,

    /// Echo every line read at the prompt, useful when stdin is redirected
    #[arg(short, long, conflicts_with = "script")]
    pub(crate) echo: bool,

    /// Load and save prompt history in this file
    #[arg(long, value_name = "FILE", conflicts_with = "script")]
    pub(crate) history: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn repl_config(&self) -> ReplConfig {
        ReplConfig {
            banner: !self.quiet,
            echo: self.echo,
            history: self.history.clone(),
        }
    }

    pub(crate) fn script_config(&self) -> ScriptConfig {
        ScriptConfig {
            strict: self.strict,
        }
    }
}
