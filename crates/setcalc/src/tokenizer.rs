//! Splits a command line into tokens.
//!
//! Tokens are maximal runs of characters that are neither whitespace nor
//! commas. Commas are never part of a token; comma placement is checked
//! separately by the validator on the raw line.

use tracing::trace;

#[inline]
fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Iterator over the tokens of one line. Create a fresh one for each pass.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    line: &'a str,
    /// Byte offset where the next scan starts
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.line[self.pos..];
        let start = match rest.find(|c: char| !is_separator(c)) {
            Some(offset) => self.pos + offset,
            None => {
                self.pos = self.line.len();
                return None;
            }
        };
        let end = self.line[start..]
            .find(is_separator)
            .map_or(self.line.len(), |offset| start + offset);
        self.pos = end;

        let token = &self.line[start..end];
        trace!(target: "tokenizer", token, start, "token");
        Some(token)
    }
}

/// Collect all tokens of a line.
pub fn tokenize(line: &str) -> Vec<&str> {
    Tokenizer::new(line).collect()
}
