//! setcalc - calculator over sets of small integers
//!
//! Usage:
//!   setcalc                      # Start the prompt
//!   setcalc --script <file>      # Run a script

mod cli;

use anyhow::Result;
use clap::Parser;
use setcalc::{repl, script, Session};

fn main() -> Result<()> {
    common::init_logging();
    let cli = cli::Cli::parse();

    let mut session = Session::new();
    match &cli.script {
        Some(path) => script::run_script(&mut session, path, &cli.script_config()),
        None => repl::run(&mut session, &cli.repl_config()),
    }
}
