//! Bits and 4-bit words.
//!
//! A [`Word`] is four [`Bit`]s, least-significant first, holding an unsigned
//! value in `0..=15`. Words deliberately implement no arithmetic operators:
//! all arithmetic goes through the gate-built [`crate::alu`].

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gates;

/// A single binary digit.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    #[default]
    Zero = 0,
    One = 1,
}

impl Bit {
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }

    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

/// Returned when a native integer does not fit in a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} does not fit in a 4-bit word (0..=15)")]
pub struct WordOutOfRange {
    pub value: u64,
}

/// An unsigned 4-bit word, stored as bits least-significant first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Word([Bit; 4]);

static_assertions::assert_eq_size!(Word, [u8; 4]);

impl Word {
    /// Number of bits in a word.
    pub const BITS: usize = 4;

    pub const ZERO: Word = Word([Bit::Zero; 4]);
    pub const ONE: Word = Word([Bit::One, Bit::Zero, Bit::Zero, Bit::Zero]);
    pub const MAX: Word = Word([Bit::One; 4]);

    /// Boolean false, as produced by `eq`.
    pub const FALSE: Word = Word::ZERO;
    /// Boolean true, as produced by `eq`.
    pub const TRUE: Word = Word::ONE;

    #[inline]
    pub const fn from_bits(bits: [Bit; 4]) -> Self {
        Word(bits)
    }

    /// Encodes `value` as a word, or `None` when it exceeds 15.
    pub const fn new(value: u8) -> Option<Self> {
        if value > 0b1111 {
            return None;
        }
        Some(Word([
            Bit::from_bool(value & 0b0001 != 0),
            Bit::from_bool(value & 0b0010 != 0),
            Bit::from_bool(value & 0b0100 != 0),
            Bit::from_bool(value & 0b1000 != 0),
        ]))
    }

    /// Encodes a boolean as `Word::TRUE` or `Word::FALSE`.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Word::TRUE } else { Word::FALSE }
    }

    #[inline]
    pub const fn bits(self) -> [Bit; 4] {
        self.0
    }

    /// Bit `index`, where 0 is the least-significant bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    #[inline]
    pub const fn bit(self, index: usize) -> Bit {
        self.0[index]
    }

    /// Decodes the word into a native integer.
    pub const fn value(self) -> u8 {
        (self.0[0] as u8) | (self.0[1] as u8) << 1 | (self.0[2] as u8) << 2 | (self.0[3] as u8) << 3
    }

    /// True when every bit is clear, computed with a NOR over the bits.
    #[inline]
    pub const fn is_zero(self) -> bool {
        let [b0, b1, b2, b3] = self.0;
        gates::nor(gates::or(b0, b1), gates::or(b2, b3)).is_set()
    }
}

impl TryFrom<u8> for Word {
    type Error = WordOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Word::new(value).ok_or(WordOutOfRange {
            value: value as u64,
        })
    }
}

impl TryFrom<u64> for Word {
    type Error = WordOutOfRange;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Word::new)
            .ok_or(WordOutOfRange { value })
    }
}

impl From<Word> for u8 {
    fn from(word: Word) -> Self {
        word.value()
    }
}

impl From<bool> for Word {
    fn from(value: bool) -> Self {
        Word::from_bool(value)
    }
}

/// Decimal rendering without leading zeros, as `printHead` emits it.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2, b3] = self.0;
        write!(
            f,
            "Word(0b{}{}{}{} = {})",
            b3 as u8,
            b2 as u8,
            b1 as u8,
            b0 as u8,
            self.value()
        )
    }
}
