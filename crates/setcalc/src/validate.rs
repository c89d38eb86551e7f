//! Grammar validation for command lines.
//!
//! Validation runs in two phases over the raw line, before anything executes:
//!
//! 1. A character scan checking comma placement against a whitespace
//!    normalized copy of the line, followed by a comma/token count check.
//! 2. An operation-specific check of the operands, dispatched by keyword.
//!
//! The first violation found is the one reported. Register contents are
//! never consulted.

use crate::commands::Operation;
use crate::error::ValidationError;
use crate::tokenizer::{tokenize, Tokenizer};
use bitset::{Register, LARGEST_MEMBER};
use tracing::{debug, trace};

/// Ends the operand list of `read_set`.
pub const TERMINATOR: i64 = -1;

/// Number of register operands taken by the binary set operations.
pub const SET_OPERATION_OPERANDS: usize = 3;

/// Outcome of validating a line that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Blank line, nothing to do
    Skip,
    /// The line is a well-formed command for this operation
    Accept(Operation),
}

/// Validate a raw command line.
pub fn validate(line: &str) -> Result<Verdict, ValidationError> {
    let result = check_line(line);
    match &result {
        Ok(Verdict::Skip) => trace!(target: "validate", "blank line"),
        Ok(Verdict::Accept(op)) => debug!(target: "validate", operation = %op, "accepted"),
        Err(err) => debug!(target: "validate", line, reason = ?err, "rejected"),
    }
    result
}

fn check_line(line: &str) -> Result<Verdict, ValidationError> {
    if line.trim().is_empty() {
        return Ok(Verdict::Skip);
    }

    // A line of only commas is rejected here
    check_commas(line)?;

    let mut tokens = Tokenizer::new(line);
    let op = tokens
        .next()
        .and_then(Operation::from_keyword)
        .ok_or(ValidationError::UnknownOperation)?;
    check_operands(op, tokens)?;
    Ok(Verdict::Accept(op))
}

/// Drop leading whitespace, keep the first whitespace character following
/// a non-whitespace character, and drop every whitespace character after it.
pub fn normalize_whitespace(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len());
    let mut text_seen = false;
    let mut space_kept = false;

    for c in line.chars() {
        if c.is_whitespace() {
            if text_seen && !space_kept {
                normalized.push(c);
                space_kept = true;
            }
        } else {
            normalized.push(c);
            text_seen = true;
        }
    }
    normalized
}

/// Check comma placement for a non-blank line.
pub fn check_commas(line: &str) -> Result<(), ValidationError> {
    let normalized = normalize_whitespace(line);
    if normalized.starts_with(',') {
        return Err(ValidationError::CommaBeforeOperation);
    }

    // Set after a comma, cleared by the next non-whitespace character
    let mut comma_pending = false;
    let mut space_seen = false;
    let mut chars = normalized.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ',' {
            if !space_seen {
                return Err(ValidationError::CommaAfterOperation);
            }
            if comma_pending {
                return Err(ValidationError::ConsecutiveCommas);
            }
            comma_pending = true;
        } else if c.is_whitespace() {
            space_seen = true;
            if chars.peek() == Some(&',') {
                return Err(ValidationError::CommaAfterOperation);
            }
        } else {
            comma_pending = false;
        }
    }

    if comma_pending {
        return Err(ValidationError::TrailingComma);
    }
    if !commas_match_tokens(line) {
        return Err(ValidationError::CommaCountMismatch);
    }
    Ok(())
}

/// A command is either a lone keyword, or a keyword followed by operands
/// with one comma between each pair of operands.
fn commas_match_tokens(line: &str) -> bool {
    let commas = line.chars().filter(|&c| c == ',').count();
    let tokens = tokenize(line).len();
    tokens == 1 || commas + 2 == tokens
}

/// Check the operands following the keyword of `op`.
pub fn check_operands(op: Operation, mut operands: Tokenizer<'_>) -> Result<(), ValidationError> {
    let arity = ValidationError::WrongOperandCount(op);

    match op {
        Operation::Stop => {
            if operands.next().is_some() {
                return Err(arity);
            }
        }
        Operation::PrintSet => {
            let name = operands.next().ok_or(arity)?;
            check_register(name)?;
            if operands.next().is_some() {
                return Err(arity);
            }
        }
        Operation::ReadSet => {
            let name = operands.next().ok_or(arity)?;
            check_register(name)?;
            check_members(operands)?;
        }
        Operation::Combine(_) => {
            let mut checked = 0;
            for name in operands {
                if checked == SET_OPERATION_OPERANDS {
                    return Err(arity);
                }
                check_register(name)?;
                checked += 1;
            }
            if checked < SET_OPERATION_OPERANDS {
                return Err(arity);
            }
        }
    }
    Ok(())
}

fn check_register(name: &str) -> Result<Register, ValidationError> {
    Register::from_name(name).ok_or(ValidationError::InvalidRegisterName)
}

/// Check the numeric operands of `read_set`: members in range, then the
/// terminator as the final operand.
pub fn check_members<'a>(operands: impl Iterator<Item = &'a str>) -> Result<(), ValidationError> {
    let mut operands = operands.peekable();
    if operands.peek().is_none() {
        return Err(ValidationError::MissingOrMisplacedTerminator);
    }

    while let Some(token) = operands.next() {
        let last = operands.peek().is_none();
        let value = parse_integer(token).ok_or(ValidationError::NonIntegerOperand)?;

        if last {
            if value > i64::from(LARGEST_MEMBER) {
                return Err(ValidationError::OperandOutOfRange);
            }
            if value != TERMINATOR {
                return Err(ValidationError::MissingOrMisplacedTerminator);
            }
        } else if !(0..=i64::from(LARGEST_MEMBER)).contains(&value) {
            return Err(ValidationError::OperandOutOfRange);
        }
    }
    Ok(())
}

/// Parse a base-10 integer: an optional `+` or `-`, then one or more ASCII
/// digits. Values too large for `i64` saturate.
pub fn parse_integer(token: &str) -> Option<i64> {
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0i64, |acc, c| {
        let digit = i64::from(c.to_digit(10)?);
        let acc = acc.saturating_mul(10);
        Some(if negative {
            acc.saturating_sub(digit)
        } else {
            acc.saturating_add(digit)
        })
    })
}
