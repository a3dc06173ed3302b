//! Jump targets: authored line numbers and resolved addresses.
//!
//! Programs are written with 1-based [`Line`] numbers so that targets read like
//! the line numbers in a listing. [`Program::load`](super::Program::load)
//! resolves every one of them into a 0-based [`Address`] exactly once; the
//! runtime only ever sees addresses.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based instruction position, as written by the program author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Line(pub usize);

/// A resolved 0-based index into a program's instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(usize);

impl Line {
    /// Resolves the line against a program of `len` instructions.
    ///
    /// Returns `None` for line 0 and for lines past the end of the program.
    pub fn resolve(self, len: usize) -> Option<Address> {
        let index = self.0.checked_sub(1)?;
        (index < len).then_some(Address(index))
    }
}

impl Address {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The 1-based line this address was resolved from.
    ///
    /// Addresses index a program's instructions, so `index + 1` never
    /// exceeds the instruction count.
    #[inline]
    pub const fn line(self) -> Line {
        Line(self.0 + 1)
    }

    /// Only [`Program`](super::Program) may mint addresses, after bounds checks.
    #[inline]
    pub(crate) const fn new_unchecked(index: usize) -> Self {
        Address(index)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
