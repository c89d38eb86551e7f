//! Binary set operations selectable at runtime.

use crate::set::Bitset;
use std::fmt;

/// A binary set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// Members of either operand (OR)
    Union,
    /// Members of both operands (AND)
    Intersect,
    /// Members of the first operand only (AND-NOT)
    Sub,
    /// Members of exactly one operand (XOR)
    SymDiff,
}

impl SetOp {
    pub const ALL: [SetOp; 4] = [SetOp::Union, SetOp::Intersect, SetOp::Sub, SetOp::SymDiff];

    /// Compute `lhs op rhs` into a new set.
    pub fn apply(self, lhs: &Bitset, rhs: &Bitset) -> Bitset {
        match self {
            SetOp::Union => lhs.union(rhs),
            SetOp::Intersect => lhs.intersection(rhs),
            SetOp::Sub => lhs.difference(rhs),
            SetOp::SymDiff => lhs.symmetric_difference(rhs),
        }
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SetOp::Union => "union",
            SetOp::Intersect => "intersection",
            SetOp::Sub => "difference",
            SetOp::SymDiff => "symmetric difference",
        };
        f.write_str(name)
    }
}
