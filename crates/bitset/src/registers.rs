//! The six named set registers.

use crate::algebra::SetOp;
use crate::set::Bitset;
use std::fmt;

/// A register name, `SETA` through `SETF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Register {
    pub const ALL: [Register; 6] = [
        Register::A,
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::F,
    ];

    /// Look up a register by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Register> {
        Register::ALL.into_iter().find(|r| r.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Register::A => "SETA",
            Register::B => "SETB",
            Register::C => "SETC",
            Register::D => "SETD",
            Register::E => "SETE",
            Register::F => "SETF",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage for the six registers. All registers start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterBank {
    seta: Bitset,
    setb: Bitset,
    setc: Bitset,
    setd: Bitset,
    sete: Bitset,
    setf: Bitset,
}

impl RegisterBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: Register) -> &Bitset {
        match register {
            Register::A => &self.seta,
            Register::B => &self.setb,
            Register::C => &self.setc,
            Register::D => &self.setd,
            Register::E => &self.sete,
            Register::F => &self.setf,
        }
    }

    pub fn get_mut(&mut self, register: Register) -> &mut Bitset {
        match register {
            Register::A => &mut self.seta,
            Register::B => &mut self.setb,
            Register::C => &mut self.setc,
            Register::D => &mut self.setd,
            Register::E => &mut self.sete,
            Register::F => &mut self.setf,
        }
    }

    /// Replace the contents of `register` with `members`.
    pub fn read(&mut self, register: Register, members: &[u8]) {
        self.get_mut(register).fill(members);
    }

    /// Store `lhs op rhs` into `dest`. `dest` may be `lhs` or `rhs`.
    pub fn combine(&mut self, op: SetOp, lhs: Register, rhs: Register, dest: Register) {
        let result = op.apply(self.get(lhs), self.get(rhs));
        *self.get_mut(dest) = result;
    }

    /// Registers paired with their contents, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, &Bitset)> {
        Register::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}
