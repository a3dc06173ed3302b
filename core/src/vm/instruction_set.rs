//! Nibble VM Instructions
//!
//! This module defines the instruction set of the stack-based virtual machine.
//!
//! # Design Principles
//!
//! - **Stack-based**: Every operation reads and writes the operand stack
//! - **Typed operands**: The operand type is fixed by the opcode, so a `push`
//!   carrying a jump target cannot be constructed
//! - **Resolved targets**: Jump targets are authored as 1-based [`Line`](super::Line)s and
//!   resolved into [`Address`]es when the program is loaded
//! - **Gate arithmetic**: `inc`, `mod` and `eq` go through [`crate::alu`]
//!
//! # Stack Discipline
//!
//! Stack effect notation lists the top first: `[h, s, ...] -> [...]`.

use core::fmt;

use ecow::EcoString;
use serde::{Deserialize, Serialize};

use super::address::Address;
use crate::word::Word;

/// A single VM instruction.
///
/// `T` is the jump target type: [`Line`](super::Line) while a program is being authored,
/// [`Address`] once it has been loaded.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction<T = Address> {
    // ========================================================================
    // Stack
    // ========================================================================
    /// Push a word
    /// Stack: [...] -> [w, ...]
    Push(Word),

    /// Discard the top word
    /// Stack: [h, ...] -> [...]
    Pop,

    /// Duplicate the top word
    /// Stack: [h, ...] -> [h, h, ...]
    Dup,

    /// Copy the second word over the top
    /// Stack: [h, s, ...] -> [s, h, s, ...]
    Peek,

    /// Overwrite the top word
    /// Stack: [h, ...] -> [w, ...]
    Replace(Word),

    // ========================================================================
    // Arithmetic
    // ========================================================================
    /// Increment the top word, wrapping at 16
    /// Stack: [h, ...] -> [h + 1, ...]
    Inc,

    /// Replace the top word with its remainder modulo the operand
    /// Stack: [h, ...] -> [h % w, ...]
    ///
    /// A zero operand is a runtime error.
    Mod(Word),

    /// Push whether the top word equals the operand, keeping the top
    /// Stack: [h, ...] -> [h == w, h, ...]
    Eq(Word),

    // ========================================================================
    // Control Flow
    // ========================================================================
    /// Unconditional jump
    /// Stack: [...] -> [...]
    Jump(T),

    /// Pop the top word and jump if it is non-zero, otherwise fall through
    /// Stack: [h, ...] -> [...]
    IfNZero(T),

    /// Halt and return the output accumulated so far
    Stop,

    // ========================================================================
    // Output
    // ========================================================================
    /// Append the top word in decimal to the output
    /// Stack: [h, ...] -> [h, ...]
    PrintHead,

    /// Append a literal string to the output
    Print(EcoString),
}

/// Instruction mnemonics without operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Push,
    Pop,
    Dup,
    Peek,
    Replace,
    Inc,
    Mod,
    Eq,
    Jump,
    IfNZero,
    Stop,
    PrintHead,
    Print,
}

impl Opcode {
    /// The mnemonic as written in program text.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Push => "push",
            Opcode::Pop => "pop",
            Opcode::Dup => "dup",
            Opcode::Peek => "peek",
            Opcode::Replace => "replace",
            Opcode::Inc => "inc",
            Opcode::Mod => "mod",
            Opcode::Eq => "eq",
            Opcode::Jump => "jump",
            Opcode::IfNZero => "ifNZero",
            Opcode::Stop => "stop",
            Opcode::PrintHead => "printHead",
            Opcode::Print => "print",
        }
    }

    /// Number of stack words the instruction reads or removes.
    pub const fn stack_inputs(self) -> usize {
        match self {
            Opcode::Push | Opcode::Jump | Opcode::Stop | Opcode::Print => 0,
            Opcode::Peek => 2,
            Opcode::Pop
            | Opcode::Dup
            | Opcode::Replace
            | Opcode::Inc
            | Opcode::Mod
            | Opcode::Eq
            | Opcode::IfNZero
            | Opcode::PrintHead => 1,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl<T> Instruction<T> {
    /// Convenience constructor for `print` from any string slice.
    pub fn print(text: &str) -> Self {
        Instruction::Print(EcoString::from(text))
    }

    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Push(_) => Opcode::Push,
            Self::Pop => Opcode::Pop,
            Self::Dup => Opcode::Dup,
            Self::Peek => Opcode::Peek,
            Self::Replace(_) => Opcode::Replace,
            Self::Inc => Opcode::Inc,
            Self::Mod(_) => Opcode::Mod,
            Self::Eq(_) => Opcode::Eq,
            Self::Jump(_) => Opcode::Jump,
            Self::IfNZero(_) => Opcode::IfNZero,
            Self::Stop => Opcode::Stop,
            Self::PrintHead => Opcode::PrintHead,
            Self::Print(_) => Opcode::Print,
        }
    }

    /// Jump target, if this is a control transfer.
    pub const fn target(&self) -> Option<&T> {
        match self {
            Self::Jump(target) | Self::IfNZero(target) => Some(target),
            _ => None,
        }
    }

    /// Rewrites the jump target, leaving every other instruction untouched.
    pub fn try_map_target<U, E>(
        self,
        f: impl FnOnce(T) -> Result<U, E>,
    ) -> Result<Instruction<U>, E> {
        Ok(match self {
            Self::Push(w) => Instruction::Push(w),
            Self::Pop => Instruction::Pop,
            Self::Dup => Instruction::Dup,
            Self::Peek => Instruction::Peek,
            Self::Replace(w) => Instruction::Replace(w),
            Self::Inc => Instruction::Inc,
            Self::Mod(w) => Instruction::Mod(w),
            Self::Eq(w) => Instruction::Eq(w),
            Self::Jump(target) => Instruction::Jump(f(target)?),
            Self::IfNZero(target) => Instruction::IfNZero(f(target)?),
            Self::Stop => Instruction::Stop,
            Self::PrintHead => Instruction::PrintHead,
            Self::Print(s) => Instruction::Print(s),
        })
    }
}

/// Formats the instruction the way it is written in program text.
impl<T: fmt::Display> fmt::Display for Instruction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match self {
            Self::Push(w) | Self::Replace(w) | Self::Mod(w) | Self::Eq(w) => {
                write!(f, "{} {}", op, w)
            }
            Self::Jump(target) | Self::IfNZero(target) => write!(f, "{} {}", op, target),
            Self::Print(s) => {
                write!(f, "{} \"", op)?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            _ => write!(f, "{}", op),
        }
    }
}

impl<T: fmt::Display> fmt::Debug for Instruction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jump(target) => write!(f, "{:8} {}", "jump", target),
            Self::IfNZero(target) => write!(f, "{:8} {}", "ifNZero", target),
            _ => fmt::Display::fmt(self, f),
        }
    }
}
