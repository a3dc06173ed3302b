//! 1-bit logic gates.
//!
//! Every arithmetic and comparison operation in [`crate::alu`] is wired out of
//! these functions. Each gate is a fixed truth table over [`Bit`]; nothing here
//! touches native integer arithmetic.

use crate::word::Bit::{self, One, Zero};

#[inline]
pub const fn not(a: Bit) -> Bit {
    match a {
        Zero => One,
        One => Zero,
    }
}

#[inline]
pub const fn and(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (One, One) => One,
        _ => Zero,
    }
}

#[inline]
pub const fn or(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Zero, Zero) => Zero,
        _ => One,
    }
}

#[inline]
pub const fn xor(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (One, Zero) | (Zero, One) => One,
        _ => Zero,
    }
}

#[inline]
pub const fn nor(a: Bit, b: Bit) -> Bit {
    not(or(a, b))
}

#[inline]
pub const fn nand(a: Bit, b: Bit) -> Bit {
    not(and(a, b))
}

/// Equivalence gate: 1 when both inputs agree.
#[inline]
pub const fn nxor(a: Bit, b: Bit) -> Bit {
    not(xor(a, b))
}

/// Four-input AND, built as a balanced tree of two-input gates.
#[inline]
pub const fn and4(a: Bit, b: Bit, c: Bit, d: Bit) -> Bit {
    and(and(a, b), and(c, d))
}

/// Four-input OR, built as a balanced tree of two-input gates.
#[inline]
pub const fn or4(a: Bit, b: Bit, c: Bit, d: Bit) -> Bit {
    or(or(a, b), or(c, d))
}
