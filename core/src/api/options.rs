//! Configuration options for the Nibble engine.

/// Configuration options for running a program.
///
/// # Example
///
/// ```
/// use nibble_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions {
///     max_steps: Some(10_000),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Maximum number of ticks before the run is abandoned (if Some).
    ///
    /// Set to `None` to run until `stop` (be careful with untrusted programs!).
    ///
    /// Default: None
    pub max_steps: Option<usize>,
}

impl ExecutionOptions {
    pub fn bounded(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// Configuration options for the Nibble engine.
///
/// These set the defaults for execution, which can be overridden on a
/// per-call basis with [`Engine::run_with`](super::Engine::run_with).
///
/// # Example
///
/// ```
/// use nibble_core::api::{EngineOptions, ExecutionOptions};
///
/// let options = EngineOptions {
///     default_execution_options: ExecutionOptions::bounded(500),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Default options for execution.
    ///
    /// These can be overridden when calling `Engine::run_with()`.
    pub default_execution_options: ExecutionOptions,
}
