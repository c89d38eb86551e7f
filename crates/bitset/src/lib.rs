//! Bitset engine for setcalc.
//!
//! - [`set`] - The fixed 128-bit [`Bitset`] and its set algebra
//! - [`algebra`] - [`SetOp`], a binary operation chosen at runtime
//! - [`registers`] - The six named registers and the [`RegisterBank`]
//! - [`format`] - Sorted, line-wrapped rendering

pub mod algebra;
pub mod format;
pub mod registers;
pub mod set;

pub use algebra::SetOp;
pub use format::{format_set, EMPTY_SET_MESSAGE, NUMBERS_PER_LINE};
pub use registers::{Register, RegisterBank};
pub use set::{Bitset, Members, Section, LARGEST_MEMBER, SECTIONS, UNIVERSE};
