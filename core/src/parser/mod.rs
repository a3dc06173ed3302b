//! Text assembly format.
//!
//! One instruction per line, with `//` comments. Jump targets are 1-based and
//! count instructions, not text lines:
//!
//! ```text
//! push 1          // line 1
//! printHead       // line 2
//! eq 15
//! ifNZero 7
//! inc
//! jump 2
//! stop            // line 7
//! ```

pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::ProgramParser;
pub use parser::Rule;
pub use parser::{ParsedInstruction, ParsedProgram, parse};

pub use error::{ParseError, ParseErrorKind};
pub use syntax::Span;
