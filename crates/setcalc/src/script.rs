//! Script execution for the calculator

use crate::session::{Flow, Session};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Script options
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptConfig {
    /// Abort on the first rejected line
    pub strict: bool,
}

/// Run a calculator script file
pub fn run_script(session: &mut Session, script_path: &Path, config: &ScriptConfig) -> Result<()> {
    let file = File::open(script_path)
        .with_context(|| format!("Failed to open script {}", script_path.display()))?;
    info!(target: "script", path = %script_path.display(), strict = config.strict, "running");

    run_lines(session, BufReader::new(file), config)
}

/// Run commands read line by line until `stop` is accepted.
///
/// Blank lines and `#` comments are skipped; every other line is echoed as
/// `> line` before it runs.
pub fn run_lines<R: BufRead>(session: &mut Session, reader: R, config: &ScriptConfig) -> Result<()> {
    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.with_context(|| format!("Error reading line {}", line_num))?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        session.echo(trimmed);

        match session.execute_line(&line) {
            Ok(Flow::Stop) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) => {
                warn!(target: "script", line = line_num, "rejected");
                session.report(&e);
                if config.strict {
                    bail!("Line {}: aborted on rejected command", line_num);
                }
            }
        }
    }

    bail!("Missing stop command")
}
