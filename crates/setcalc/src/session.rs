//! Calculator session: owns the registers and executes commands

use crate::commands::{self, Command};
use crate::error::SessionError;
use bitset::{format_set, Register, RegisterBank};
use tracing::{debug, info};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    /// `stop` was executed; no further commands run
    Terminated,
}

/// What the front end should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// A calculator session
#[derive(Debug)]
pub struct Session {
    /// The six set registers
    registers: RegisterBank,
    state: State,
    /// Whether emitted lines go to stdout/stderr
    stdio: bool,
    /// Whether emitted lines are kept in `output`
    capture: bool,
    /// Captured output lines
    output: Vec<String>,
}

impl Session {
    /// Create a session that prints to stdout/stderr without keeping its
    /// output.
    pub fn new() -> Self {
        Self {
            registers: RegisterBank::new(),
            state: State::Idle,
            stdio: true,
            capture: false,
            output: Vec::new(),
        }
    }

    /// Create a session that only captures its output.
    pub fn captured() -> Self {
        Self {
            stdio: false,
            capture: true,
            ..Self::new()
        }
    }

    fn emit(&mut self, s: String) {
        if self.capture {
            self.output.push(s);
        }
    }

    /// Print a line to stdout (captured)
    fn println(&mut self, msg: impl AsRef<str>) {
        let s = msg.as_ref().to_string();
        if self.stdio {
            println!("{}", s);
        }
        self.emit(s);
    }

    /// Print a line to stderr (captured)
    fn eprintln(&mut self, msg: impl AsRef<str>) {
        let s = msg.as_ref().to_string();
        if self.stdio {
            eprintln!("{}", s);
        }
        self.emit(s);
    }

    /// Get captured output
    pub fn get_output(&self) -> &[String] {
        &self.output
    }

    /// Clear captured output
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn registers(&self) -> &RegisterBank {
        &self.registers
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == State::Terminated
    }

    /// Echo a received line as `> line`.
    pub fn echo(&mut self, line: &str) {
        self.println(format!("> {}", line));
    }

    /// Report a rejected line.
    pub fn report(&mut self, err: &SessionError) {
        self.eprintln(format!("Error: {}", err));
    }

    /// Execute a command
    pub fn execute(&mut self, cmd: Command) -> Result<Flow, SessionError> {
        if self.is_terminated() {
            return Err(SessionError::Terminated);
        }
        debug!(target: "session", operation = %cmd.operation(), "execute");

        match cmd {
            Command::ReadSet { target, members } => self.cmd_read(target, &members),
            Command::PrintSet(register) => self.cmd_print(register),
            Command::Combine { op, lhs, rhs, dest } => {
                self.registers.combine(op, lhs, rhs, dest);
            }
            Command::Stop => {
                self.state = State::Terminated;
                info!(target: "session", "stopped");
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn cmd_read(&mut self, target: Register, members: &[u8]) {
        self.registers.read(target, members);
        debug!(target: "session", register = %target, count = members.len(), "read");
    }

    fn cmd_print(&mut self, register: Register) {
        let text = format_set(self.registers.get(register));
        self.println(text);
    }

    /// Validate a raw line, build its command and execute it.
    /// Blank lines do nothing.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, SessionError> {
        match commands::parse(line)? {
            Some(cmd) => self.execute(cmd),
            None => Ok(Flow::Continue),
        }
    }

    /// Execute a line, reporting a rejection instead of returning it.
    pub fn feed(&mut self, line: &str) -> Flow {
        match self.execute_line(line) {
            Ok(flow) => flow,
            Err(err) => {
                self.report(&err);
                match err {
                    SessionError::Terminated => Flow::Stop,
                    SessionError::Rejected(_) => Flow::Continue,
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
