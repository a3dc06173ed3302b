//! Nibble - a 4-bit stack machine built from logic gates
//!
//! # Overview
//!
//! Every word is four bits and every arithmetic operation the machine performs
//! is composed from NOT, AND, OR and XOR gates: adders, subtractors, a
//! comparator, a shift-and-add multiplier and a repeated-subtraction divider.
//! Programs are short lists of stack instructions with 1-based jump targets.
//!
//! # Quick Start
//!
//! ```
//! use nibble::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let program = engine
//!     .load(
//!         "push 1
//!          printHead
//!          eq 3
//!          ifNZero 7
//!          inc
//!          jump 2
//!          stop",
//!     )
//!     .unwrap();
//!
//! let output = engine.run(&program).unwrap();
//! let lines: Vec<&str> = output.iter().map(|line| line.as_str()).collect();
//! assert_eq!(lines, ["1", "2", "3"]);
//! ```
//!
//! # Building programs directly
//!
//! ```
//! use nibble::vm::{Instruction::*, Program, run};
//! use nibble::Word;
//!
//! let program = Program::load(vec![Push(Word::MAX), PrintHead, Stop]).unwrap();
//! assert_eq!(run(&program).unwrap()[0].as_str(), "15");
//! ```

mod error_renderer;

// Re-export public API from nibble_core
pub use nibble_core::api::{
    Diagnostic, Engine, EngineOptions, Error, ExecutionError, ExecutionOptions, Severity,
    StepLimitExceeded, run_bounded,
};

// Re-export the machine itself
pub use nibble_core::{Bit, Word, alu, gates, parser, vm};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
