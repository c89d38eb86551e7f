//! Fixed-universe bitset over the integers 0-127.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

/// One 8-bit chunk of a bitset.
pub type Section = u8;

/// Number of sections in a bitset.
pub const SECTIONS: usize = 16;

/// Number of members covered by one section.
pub const SECTION_BITS: usize = Section::BITS as usize;

/// Size of the universe (members are `0..UNIVERSE`).
pub const UNIVERSE: usize = SECTIONS * SECTION_BITS;

/// Largest value that can be a member.
pub const LARGEST_MEMBER: u8 = (UNIVERSE - 1) as u8;

/// A subset of 0-127 stored as 16 sections of 8 bits.
///
/// Bit `i % 8` of section `i / 8` is set iff `i` is a member. Bits outside the
/// universe do not exist, so every value of this type is a valid set.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitset {
    sections: [Section; SECTIONS],
}

#[inline]
fn location(member: u8) -> (usize, Section) {
    let index = member as usize / SECTION_BITS;
    let mask = 1 << (member as usize % SECTION_BITS);
    (index, mask)
}

impl Bitset {
    /// The empty set.
    pub const fn empty() -> Self {
        Self {
            sections: [0; SECTIONS],
        }
    }

    /// Build a set from a list of members.
    pub fn from_members(members: &[u8]) -> Self {
        let mut set = Self::empty();
        set.fill(members);
        set
    }

    /// Replace the contents with exactly the given members.
    pub fn fill(&mut self, members: &[u8]) {
        self.clear();
        for &member in members {
            self.insert(member);
        }
    }

    /// Add a member. Returns `false` and leaves the set untouched when the
    /// value is outside the universe.
    pub fn insert(&mut self, member: u8) -> bool {
        if member > LARGEST_MEMBER {
            return false;
        }
        let (index, mask) = location(member);
        self.sections[index] |= mask;
        true
    }

    pub fn contains(&self, member: u8) -> bool {
        if member > LARGEST_MEMBER {
            return false;
        }
        let (index, mask) = location(member);
        self.sections[index] & mask != 0
    }

    pub fn clear(&mut self) {
        self.sections = [0; SECTIONS];
    }

    /// True iff every section is zero.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|&s| s == 0)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.count_ones() as usize).sum()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Members<'_> {
        Members {
            set: self,
            next: 0,
        }
    }

    /// Raw sections, lowest members first.
    pub fn sections(&self) -> &[Section; SECTIONS] {
        &self.sections
    }

    fn zip_with(&self, other: &Bitset, f: impl Fn(Section, Section) -> Section) -> Bitset {
        let mut result = Bitset::empty();
        for (out, (&a, &b)) in result
            .sections
            .iter_mut()
            .zip(self.sections.iter().zip(other.sections.iter()))
        {
            *out = f(a, b);
        }
        result
    }

    /// Members of either set.
    pub fn union(&self, other: &Bitset) -> Bitset {
        self.zip_with(other, |a, b| a | b)
    }

    /// Members of both sets.
    pub fn intersection(&self, other: &Bitset) -> Bitset {
        self.zip_with(other, |a, b| a & b)
    }

    /// Members of `self` that are not in `other`.
    pub fn difference(&self, other: &Bitset) -> Bitset {
        self.zip_with(other, |a, b| a & !b)
    }

    /// Members of exactly one of the sets.
    pub fn symmetric_difference(&self, other: &Bitset) -> Bitset {
        self.zip_with(other, |a, b| a ^ b)
    }
}

/// Iterator over the members of a [`Bitset`], ascending.
pub struct Members<'a> {
    set: &'a Bitset,
    next: usize,
}

impl Iterator for Members<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.next < UNIVERSE {
            let index = self.next / SECTION_BITS;
            // Skip whole empty sections.
            if self.next % SECTION_BITS == 0 && self.set.sections[index] == 0 {
                self.next += SECTION_BITS;
                continue;
            }
            let member = self.next as u8;
            self.next += 1;
            if self.set.contains(member) {
                return Some(member);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Bitset {
    type Item = u8;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Members<'a> {
        self.iter()
    }
}

impl FromIterator<u8> for Bitset {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Bitset::empty();
        for member in iter {
            set.insert(member);
        }
        set
    }
}

impl BitOr for Bitset {
    type Output = Bitset;

    fn bitor(self, rhs: Bitset) -> Bitset {
        self.union(&rhs)
    }
}

impl BitAnd for Bitset {
    type Output = Bitset;

    fn bitand(self, rhs: Bitset) -> Bitset {
        self.intersection(&rhs)
    }
}

impl Sub for Bitset {
    type Output = Bitset;

    fn sub(self, rhs: Bitset) -> Bitset {
        self.difference(&rhs)
    }
}

impl BitXor for Bitset {
    type Output = Bitset;

    fn bitxor(self, rhs: Bitset) -> Bitset {
        self.symmetric_difference(&rhs)
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(members: &[u8]) -> Bitset {
        Bitset::from_members(members)
    }

    #[test]
    fn test_empty() {
        let s = Bitset::empty();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.iter().next(), None);
        assert_eq!(s, Bitset::default());
    }

    #[test]
    fn test_insert_boundaries() {
        let mut s = Bitset::empty();
        assert!(s.insert(0));
        assert!(s.insert(127));
        assert!(s.contains(0));
        assert!(s.contains(127));
        assert!(!s.contains(1));
        assert_eq!(s.sections()[0], 0b0000_0001);
        assert_eq!(s.sections()[15], 0b1000_0000);
    }

    #[test]
    fn test_insert_outside_universe() {
        let mut s = Bitset::empty();
        assert!(!s.insert(128));
        assert!(!s.insert(255));
        assert!(s.is_empty());
        assert!(!s.contains(200));
    }

    #[test]
    fn test_fill_replaces_contents() {
        let mut s = set(&[1, 2, 3]);
        s.fill(&[64]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![64]);
        s.fill(&[]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_iter_is_ascending() {
        let s = set(&[127, 3, 10, 8, 7, 64]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 7, 8, 10, 64, 127]);
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn test_duplicates_collapse() {
        let s = set(&[5, 5, 5]);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_operations() {
        let a = set(&[1, 2, 3, 100]);
        let b = set(&[3, 4, 100, 127]);
        assert_eq!(a.union(&b), set(&[1, 2, 3, 4, 100, 127]));
        assert_eq!(a.intersection(&b), set(&[3, 100]));
        assert_eq!(a.difference(&b), set(&[1, 2]));
        assert_eq!(a.symmetric_difference(&b), set(&[1, 2, 4, 127]));
    }

    #[test]
    fn test_operators_match_methods() {
        let a = set(&[0, 9, 64]);
        let b = set(&[9, 65]);
        assert_eq!(a | b, a.union(&b));
        assert_eq!(a & b, a.intersection(&b));
        assert_eq!(a - b, a.difference(&b));
        assert_eq!(a ^ b, a.symmetric_difference(&b));
    }

    #[test]
    fn test_commutativity() {
        let a = set(&[1, 2, 50, 99]);
        let b = set(&[2, 3, 99, 120]);
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.intersection(&b), b.intersection(&a));
        assert_eq!(a.symmetric_difference(&b), b.symmetric_difference(&a));
        assert_ne!(a.difference(&b), b.difference(&a));
    }

    #[test]
    fn test_self_operations() {
        let a = set(&[4, 8, 15, 16, 23, 42]);
        assert_eq!(a.union(&a), a);
        assert_eq!(a.intersection(&a), a);
        assert!(a.difference(&a).is_empty());
        assert!(a.symmetric_difference(&a).is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let s: Bitset = [9u8, 1, 200].into_iter().collect();
        assert_eq!(s, set(&[1, 9]));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", set(&[2, 1])), "{1, 2}");
    }
}
