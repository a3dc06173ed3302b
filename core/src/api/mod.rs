//! Public API for loading and running Nibble programs.
//!
//! The [`Engine`] ties the text assembly parser, the program loader and the
//! VM together, and applies the configured [`ExecutionOptions`]:
//!
//! 1. **Unbounded** (`max_steps: None`): ticks until `stop`, like
//!    [`crate::vm::run`].
//! 2. **Bounded** (`max_steps: Some(n)`): gives up after `n` ticks with
//!    [`Error::ResourceExceeded`].
//!
//! # Example
//!
//! ```ignore
//! use nibble_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let program = engine.load("push 15\nprintHead\nstop").unwrap();
//! let output = engine.run(&program).unwrap();
//! assert_eq!(output[0].as_str(), "15");
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod runner;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::{EngineOptions, ExecutionOptions};
pub use runner::{ExecutionError, StepLimitExceeded, run_bounded};
