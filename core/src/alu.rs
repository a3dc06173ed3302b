//! 4-bit arithmetic-logic unit.
//!
//! Everything here is composed from the gates in [`crate::gates`]: adders and
//! subtractors ripple a carry/borrow from bit 0 to bit 3, comparison combines
//! per-bit results from the most-significant bit down, and multiplication and
//! division are built on top of [`add`], [`sub`] and [`compare`].
//!
//! Results wrap modulo 16; the final carry or borrow is dropped unless the
//! caller asks for it through [`add_with_carry`] or [`sub_with_borrow`].

use crate::gates::{and, and4, nor, not, nxor, or, or4, xor};
use crate::word::{Bit, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdderResult {
    pub sum: Bit,
    pub carry: Bit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtractResult {
    pub diff: Bit,
    pub borrow: Bit,
}

/// Outcome of comparing `a` against `b`. Exactly one field is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub less: Bit,
    pub eq: Bit,
    pub grt: Bit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub count: Word,
    pub remainder: Word,
}

pub const fn half_adder(a: Bit, b: Bit) -> AdderResult {
    AdderResult {
        sum: xor(a, b),
        carry: and(a, b),
    }
}

pub const fn full_adder(carry: Bit, a: Bit, b: Bit) -> AdderResult {
    let first = half_adder(a, b);
    let second = half_adder(carry, first.sum);
    AdderResult {
        sum: second.sum,
        carry: or(second.carry, first.carry),
    }
}

/// Ripple-carry addition, returning the carry out of bit 3.
pub fn add_with_carry(a: Word, b: Word) -> (Word, Bit) {
    let mut carry = Bit::Zero;
    let mut sum = [Bit::Zero; Word::BITS];
    for (i, out) in sum.iter_mut().enumerate() {
        let stage = full_adder(carry, a.bit(i), b.bit(i));
        *out = stage.sum;
        carry = stage.carry;
    }
    (Word::from_bits(sum), carry)
}

/// `(a + b) mod 16`.
pub fn add(a: Word, b: Word) -> Word {
    add_with_carry(a, b).0
}

pub const fn half_subtractor(a: Bit, b: Bit) -> SubtractResult {
    SubtractResult {
        diff: xor(a, b),
        borrow: and(not(a), b),
    }
}

pub const fn full_subtractor(borrow: Bit, a: Bit, b: Bit) -> SubtractResult {
    let first = half_subtractor(a, b);
    let second = half_subtractor(first.diff, borrow);
    SubtractResult {
        diff: second.diff,
        borrow: or(first.borrow, second.borrow),
    }
}

/// Ripple-borrow subtraction, returning the borrow out of bit 3.
pub fn sub_with_borrow(a: Word, b: Word) -> (Word, Bit) {
    let mut borrow = Bit::Zero;
    let mut diff = [Bit::Zero; Word::BITS];
    for (i, out) in diff.iter_mut().enumerate() {
        let stage = full_subtractor(borrow, a.bit(i), b.bit(i));
        *out = stage.diff;
        borrow = stage.borrow;
    }
    (Word::from_bits(diff), borrow)
}

/// `(a - b) mod 16`.
pub fn sub(a: Word, b: Word) -> Word {
    sub_with_borrow(a, b).0
}

/// Single-bit comparator.
pub const fn compare_bit(a: Bit, b: Bit) -> Comparison {
    let less = and(not(a), b);
    let grt = and(a, not(b));
    Comparison {
        less,
        eq: nor(less, grt),
        grt,
    }
}

/// Compares two words. The highest bit where they differ decides the order.
pub fn compare(a: Word, b: Word) -> Comparison {
    let c0 = compare_bit(a.bit(0), b.bit(0));
    let c1 = compare_bit(a.bit(1), b.bit(1));
    let c2 = compare_bit(a.bit(2), b.bit(2));
    let c3 = compare_bit(a.bit(3), b.bit(3));

    Comparison {
        less: or4(
            c3.less,
            and(c3.eq, c2.less),
            and(c3.eq, and(c2.eq, c1.less)),
            and4(c3.eq, c2.eq, c1.eq, c0.less),
        ),
        eq: and4(c0.eq, c1.eq, c2.eq, c3.eq),
        grt: or4(
            c3.grt,
            and(c3.eq, c2.grt),
            and(c3.eq, and(c2.eq, c1.grt)),
            and4(c3.eq, c2.eq, c1.eq, c0.grt),
        ),
    }
}

/// Equality as a boolean word: `Word::TRUE` when every bit pair agrees.
pub fn eq(a: Word, b: Word) -> Word {
    let equal = and4(
        nxor(a.bit(0), b.bit(0)),
        nxor(a.bit(1), b.bit(1)),
        nxor(a.bit(2), b.bit(2)),
        nxor(a.bit(3), b.bit(3)),
    );
    Word::from_bits([equal, Bit::Zero, Bit::Zero, Bit::Zero])
}

pub fn bitwise_and(a: Word, b: Word) -> Word {
    Word::from_bits([
        and(a.bit(0), b.bit(0)),
        and(a.bit(1), b.bit(1)),
        and(a.bit(2), b.bit(2)),
        and(a.bit(3), b.bit(3)),
    ])
}

/// `b` gated by `select` and wired `shift` positions towards the MSB.
/// Bits shifted past bit 3 are dropped.
fn partial_product(select: Bit, b: Word, shift: usize) -> Word {
    let mut bits = [Bit::Zero; Word::BITS];
    for (i, out) in bits.iter_mut().enumerate().skip(shift) {
        *out = and(select, b.bit(i - shift));
    }
    Word::from_bits(bits)
}

/// Shift-and-add multiplication, `(a * b) mod 16`.
pub fn mul(a: Word, b: Word) -> Word {
    (0..Word::BITS)
        .map(|i| partial_product(a.bit(i), b, i))
        .fold(Word::ZERO, add)
}

/// Division by repeated subtraction.
///
/// Returns `None` for a zero divisor, where the subtraction loop would never
/// reach a remainder below the divisor.
pub fn div(numerator: Word, divisor: Word) -> Option<Division> {
    if divisor.is_zero() {
        return None;
    }

    let mut count = Word::ZERO;
    let mut remainder = numerator;
    while !compare(remainder, divisor).less.is_set() {
        count = add(count, Word::ONE);
        remainder = sub(remainder, divisor);
    }
    Some(Division { count, remainder })
}

/// Remainder of [`div`]; `None` for a zero divisor.
pub fn modulo(a: Word, b: Word) -> Option<Word> {
    div(a, b).map(|d| d.remainder)
}
