//! setcalc library
//!
//! Line-oriented front end over the [`bitset`] engine: tokenizing, grammar
//! validation, command building and the session that executes commands.

pub mod commands;
pub mod error;
pub mod repl;
pub mod script;
pub mod session;
pub mod tokenizer;
pub mod validate;

pub use commands::{parse, Command, Operation};
pub use error::{SessionError, ValidationError};
pub use repl::ReplConfig;
pub use script::{run_lines, run_script, ScriptConfig};
pub use session::{Flow, Session, State};
pub use tokenizer::{tokenize, Tokenizer};
pub use validate::{validate, Verdict};
