//! The stack machine: instruction set, program model and driver loop.
//!
//! Data flows one way: authored instructions are resolved into a [`Program`]
//! once, a [`Vm`] ticks through it until `stop`, and the accumulated
//! [`Output`] is handed back.
//!
//! ```ignore
//! use nibble_core::vm::{Instruction::*, Program, run};
//! use nibble_core::Word;
//!
//! let program = Program::load(vec![Push(Word::MAX), PrintHead, Stop])?;
//! assert_eq!(run(&program)?[0].as_str(), "15");
//! ```

mod address;
mod error;
mod instruction_set;
mod program;
mod runtime;
mod stack;


pub use address::{Address, Line};
pub use error::{LoadError, VmError, VmErrorKind};
pub use instruction_set::{Instruction, Opcode};
pub use program::Program;
pub use runtime::{Snapshot, Tick, Vm, run};

pub(crate) use stack::Stack;

/// Everything a run printed, in execution order.
pub type Output = crate::Vec<ecow::EcoString>;
