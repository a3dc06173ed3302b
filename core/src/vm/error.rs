//! Program loading and runtime errors.
//!
//! # Error Categories
//!
//! - **Load errors**: a jump target that does not name an instruction. These
//!   are caught once, before anything runs.
//!
//! - **Runtime errors**: faults detected while ticking, before the faulting
//!   instruction has any effect. A malformed program (program counter past the
//!   end, stack underflow) and division by zero both end the run.
//!
//! Running forever is not an error here; see [`crate::api::run_bounded`].

use thiserror::Error;

use super::Output;
use super::address::Line;
use super::instruction_set::Opcode;

/// Raised while turning instructions into a [`Program`](super::Program).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// An authored line number names no instruction.
    #[error("instruction {} jumps to line {line}, but the program has {len} instruction(s)", .index + 1)]
    LineOutOfRange { index: usize, line: Line, len: usize },

    /// A resolved address points past the end of the program.
    #[error("instruction {} jumps to address {address}, but the program has {len} instruction(s)", .index + 1)]
    AddressOutOfRange {
        index: usize,
        address: usize,
        len: usize,
    },
}

/// What went wrong during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmErrorKind {
    /// The program counter does not index an instruction.
    #[error("program counter ran past the end of the program ({len} instruction(s))")]
    PcOutOfBounds { len: usize },

    /// The instruction needs more words than the stack holds.
    #[error("`{opcode}` needs {needed} stack word(s) but the stack holds {found}")]
    StackUnderflow {
        opcode: Opcode,
        needed: usize,
        found: usize,
    },

    /// `mod 0`.
    #[error("division by zero")]
    DivisionByZero,
}

impl VmErrorKind {
    /// True for faults caused by the program's shape rather than its data.
    pub fn is_malformed_program(&self) -> bool {
        matches!(self, Self::PcOutOfBounds { .. } | Self::StackUnderflow { .. })
    }
}

/// Runtime fault, with the output produced before it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (at line {})", .pc + 1)]
pub struct VmError {
    pub kind: VmErrorKind,
    /// 0-based index of the faulting instruction.
    pub pc: usize,
    /// Output appended before the fault. It is a valid partial result.
    pub output: Output,
}
