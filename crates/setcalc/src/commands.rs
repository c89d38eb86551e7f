//! Command parsing for the calculator

use crate::error::ValidationError;
use crate::tokenizer::Tokenizer;
use crate::validate::{self, Verdict};
use bitset::{Register, SetOp, LARGEST_MEMBER};
use std::fmt;

/// An operation keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `read_set <set>, <number>, ..., -1`
    ReadSet,
    /// `print_set <set>`
    PrintSet,
    /// `union_set`, `intersect_set`, `sub_set`, `symdiff_set` with three sets
    Combine(SetOp),
    /// `stop`
    Stop,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::ReadSet,
        Operation::PrintSet,
        Operation::Combine(SetOp::Union),
        Operation::Combine(SetOp::Intersect),
        Operation::Combine(SetOp::Sub),
        Operation::Combine(SetOp::SymDiff),
        Operation::Stop,
    ];

    /// Look up an operation by its exact keyword.
    pub fn from_keyword(word: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.keyword() == word)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Operation::ReadSet => "read_set",
            Operation::PrintSet => "print_set",
            Operation::Combine(SetOp::Union) => "union_set",
            Operation::Combine(SetOp::Intersect) => "intersect_set",
            Operation::Combine(SetOp::Sub) => "sub_set",
            Operation::Combine(SetOp::SymDiff) => "symdiff_set",
            Operation::Stop => "stop",
        }
    }

    /// Syntax summary shown in the banner.
    pub fn usage(self) -> String {
        match self {
            Operation::ReadSet => "read_set <set>, <number>, <number>, ..., -1".to_string(),
            Operation::PrintSet => "print_set <set>".to_string(),
            Operation::Combine(_) => format!("{} <set>, <set>, <set>", self.keyword()),
            Operation::Stop => "stop".to_string(),
        }
    }

    pub fn description(self) -> String {
        match self {
            Operation::ReadSet => "Fills the set with the given numbers.".to_string(),
            Operation::PrintSet => "Prints the set.".to_string(),
            Operation::Combine(op) => {
                format!("Sets the third set to the {} of the first two sets.", op)
            }
            Operation::Stop => "Ends the program.".to_string(),
        }
    }

    pub(crate) fn arity_message(self) -> &'static str {
        match self {
            Operation::ReadSet => "read_set requires a set name followed by numbers.",
            Operation::PrintSet => "print_set only accepts a single operand.",
            Operation::Combine(_) => "Set operations only accept exactly 3 operands.",
            Operation::Stop => "stop does not accept any operands.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed, validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a register's contents. The terminator is not included.
    ReadSet { target: Register, members: Vec<u8> },
    /// Print a register
    PrintSet(Register),
    /// Store `lhs op rhs` into `dest`
    Combine {
        op: SetOp,
        lhs: Register,
        rhs: Register,
        dest: Register,
    },
    /// End the session
    Stop,
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::ReadSet { .. } => Operation::ReadSet,
            Command::PrintSet(_) => Operation::PrintSet,
            Command::Combine { op, .. } => Operation::Combine(*op),
            Command::Stop => Operation::Stop,
        }
    }
}

/// Parse a command line into a Command.
///
/// Returns `Ok(None)` for a blank line. The line is validated first; the
/// command is then built from a second, fresh pass over the tokens.
pub fn parse(line: &str) -> Result<Option<Command>, ValidationError> {
    match validate::validate(line)? {
        Verdict::Skip => Ok(None),
        Verdict::Accept(op) => build(op, line).map(Some),
    }
}

fn build(op: Operation, line: &str) -> Result<Command, ValidationError> {
    let mut tokens = Tokenizer::new(line);
    // Skip the keyword
    tokens.next();

    match op {
        Operation::Stop => Ok(Command::Stop),
        Operation::PrintSet => Ok(Command::PrintSet(register(tokens.next())?)),
        Operation::ReadSet => {
            let target = register(tokens.next())?;
            let operands: Vec<&str> = tokens.collect();
            let (_terminator, members) = operands
                .split_last()
                .ok_or(ValidationError::MissingOrMisplacedTerminator)?;
            let members = members
                .iter()
                .map(|token| member(token))
                .collect::<Result<Vec<u8>, _>>()?;
            Ok(Command::ReadSet { target, members })
        }
        Operation::Combine(op) => Ok(Command::Combine {
            op,
            lhs: register(tokens.next())?,
            rhs: register(tokens.next())?,
            dest: register(tokens.next())?,
        }),
    }
}

fn register(token: Option<&str>) -> Result<Register, ValidationError> {
    token
        .and_then(Register::from_name)
        .ok_or(ValidationError::InvalidRegisterName)
}

fn member(token: &str) -> Result<u8, ValidationError> {
    let value = validate::parse_integer(token).ok_or(ValidationError::NonIntegerOperand)?;
    u8::try_from(value)
        .ok()
        .filter(|&m| m <= LARGEST_MEMBER)
        .ok_or(ValidationError::OperandOutOfRange)
}
