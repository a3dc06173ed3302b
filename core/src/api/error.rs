//! Public error types for the Nibble API.
//!
//! Layer-specific errors ([`ParseError`], [`LoadError`], [`VmError`],
//! [`ExecutionError`]) are converted to [`Error`] at the API boundary.

use core::fmt;

use thiserror::Error;

use super::runner::{ExecutionError, StepLimitExceeded};
use crate::parser::{ParseError, Span};
use crate::vm::{LoadError, Output, VmError};
use crate::{String, Vec, vec};

/// Public error type for all Nibble operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The program text did not parse or did not resolve.
    ///
    /// Carries the source so diagnostics can be rendered against it.
    #[error("compilation failed with {} error(s)", error_count(.diagnostics))]
    Compilation {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    /// Instructions built outside the parser failed to load.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// The VM faulted (malformed program or division by zero).
    #[error("runtime error: {0}")]
    Runtime(#[from] VmError),

    /// The step limit was reached before `stop`.
    #[error("resource limit exceeded: {0}")]
    ResourceExceeded(#[from] StepLimitExceeded),
}

impl Error {
    /// Output produced before the run failed, if it got that far.
    pub fn partial_output(&self) -> Option<&Output> {
        match self {
            Error::Runtime(err) => Some(&err.output),
            Error::ResourceExceeded(err) => Some(&err.output),
            Error::Compilation { .. } | Error::Load(_) => None,
        }
    }
}

fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count()
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            src: err.source,
        }
    }
}

impl From<ExecutionError> for Error {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Vm(err) => Error::Runtime(err),
            ExecutionError::ResourceExceeded(err) => Error::ResourceExceeded(err),
        }
    }
}

/// A diagnostic message with a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Byte range of the offending text.
    pub span: Span,

    /// Suggestions on how to fix the issue.
    pub help: Vec<String>,

    /// Error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
