//! Human-readable rendering of sets.

use crate::set::Bitset;
use std::fmt::{self, Write};

/// Members printed on one line before wrapping.
pub const NUMBERS_PER_LINE: usize = 16;

/// Rendering of the empty set.
pub const EMPTY_SET_MESSAGE: &str = "The set is empty.";

/// Number of decimal digits in a member (1-3).
pub fn digit_count(member: u8) -> usize {
    match member {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

/// Render a set as `{a, b, c}` in ascending order, or [`EMPTY_SET_MESSAGE`].
///
/// After every [`NUMBERS_PER_LINE`] members the separator becomes `,\n` if
/// more members follow. The closing brace always follows the last member
/// directly, so the output never ends with a newline.
pub fn format_set(set: &Bitset) -> String {
    if set.is_empty() {
        return EMPTY_SET_MESSAGE.to_string();
    }

    let mut out = String::with_capacity(formatted_len(set));
    out.push('{');
    for (i, member) in set.iter().enumerate() {
        if i > 0 {
            out.push(',');
            out.push(if i % NUMBERS_PER_LINE == 0 { '\n' } else { ' ' });
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", member);
    }
    out.push('}');
    out
}

/// Byte length of [`format_set`] output, computed from digit counts alone.
pub fn formatted_len(set: &Bitset) -> usize {
    let count = set.len();
    if count == 0 {
        return EMPTY_SET_MESSAGE.len();
    }
    let digits: usize = set.iter().map(digit_count).sum();
    // Braces, then one comma plus a space or newline between neighbours.
    2 + digits + 2 * (count - 1)
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format_set(self))
    }
}
