//! Logging setup with per-component filters.
//!
//! Control via DEBUG environment variable:
//! - `DEBUG=*` - Enable all components
//! - `DEBUG=validate` - Enable only the grammar validator
//! - `DEBUG=validate,session` - Enable multiple
//!
//! Verbosity via DEBUG_VERBOSITY (0-3, default 1)
//!
//! Components are `tracing` targets, so events are emitted as
//! `tracing::debug!(target: "validate", ...)`.

use std::env;
use std::sync::OnceLock;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Targets used by the workspace crates.
pub const COMPONENTS: &[&str] = &["logging", "tokenizer", "validate", "session", "repl", "script"];

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum EnabledConfig {
    All,
    None,
    Some(Vec<String>),
}

fn parse_enabled(value: Option<&str>) -> EnabledConfig {
    match value.map(str::trim) {
        None | Some("") => EnabledConfig::None,
        Some("*") | Some("1") | Some("true") => EnabledConfig::All,
        Some(value) => {
            let mut names: Vec<String> = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            names.dedup();
            if names.is_empty() {
                EnabledConfig::None
            } else {
                EnabledConfig::Some(names)
            }
        }
    }
}

fn parse_verbosity(value: Option<&str>) -> u8 {
    value
        .and_then(|v| v.trim().parse().ok())
        .map(|v: u8| v.min(3))
        .unwrap_or(1)
}

fn level_name(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build an `EnvFilter` directive string from the values of `DEBUG` and
/// `DEBUG_VERBOSITY`.
pub fn directives(debug: Option<&str>, verbosity: Option<&str>) -> String {
    let level = level_name(parse_verbosity(verbosity));
    match parse_enabled(debug) {
        EnabledConfig::None => "off".to_string(),
        EnabledConfig::All => level.to_string(),
        EnabledConfig::Some(names) => names
            .iter()
            .map(|name| format!("{}={}", name, level))
            .collect::<Vec<_>>()
            .join(","),
    }
}

// ============================================================================
// Subscriber
// ============================================================================

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber configured from the environment.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let debug = env::var("DEBUG").ok();
        let verbosity = env::var("DEBUG_VERBOSITY").ok();
        let directives = directives(debug.as_deref(), verbosity.as_deref());
        let filter = EnvFilter::new(&directives);

        // Another subscriber may already be installed (tests, embedding).
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(true)
            .try_init();
        match installed {
            Ok(()) => info!(target: "logging", %directives, "logging installed"),
            Err(e) => debug!(target: "logging", error = %e, "subscriber already set"),
        }
    });
}
