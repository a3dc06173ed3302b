//! Main entry point for loading and running programs.

use super::{EngineOptions, Error, ExecutionOptions, run_bounded};
use crate::parser;
use crate::vm::{self, Output, Program};

/// Loads program text and runs it under the configured limits.
///
/// The engine holds no per-run state, so one engine can load and run any
/// number of programs.
///
/// # Example
///
/// ```
/// use nibble_core::api::{Engine, EngineOptions, ExecutionOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// let program = engine.load("push 7\nprintHead\nstop").unwrap();
/// let output = engine.run(&program).unwrap();
/// assert_eq!(output.len(), 1);
///
/// // Override the step bound for a single run.
/// let looping = engine.load("jump 1").unwrap();
/// assert!(engine.run_with(&looping, &ExecutionOptions::bounded(100)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parses assembly text and resolves it into a [`Program`].
    pub fn load(&self, source: &str) -> Result<Program, Error> {
        let parsed = parser::parse(source)?;
        Ok(parsed.into_program()?)
    }

    /// Runs `program` with the engine's default execution options.
    pub fn run(&self, program: &Program) -> Result<Output, Error> {
        self.run_with(program, &self.options.default_execution_options)
    }

    /// Runs `program` with explicit execution options.
    pub fn run_with(&self, program: &Program, options: &ExecutionOptions) -> Result<Output, Error> {
        match options.max_steps {
            Some(max_steps) => Ok(run_bounded(program, max_steps)?),
            None => Ok(vm::run(program)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec;
    use pretty_assertions::assert_eq;

    fn lines(output: &Output) -> Vec<&str> {
        output.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_load_and_run() {
        let engine = Engine::default();
        let program = engine
            .load("push 3\nmod 2\nprintHead\nprint \"odd\"\nstop\n")
            .unwrap();
        assert_eq!(lines(&engine.run(&program).unwrap()), vec!["1", "odd"]);
    }

    #[test]
    fn test_parse_errors_are_compilation_errors() {
        let engine = Engine::default();
        let err = engine.load("push 16").unwrap_err();
        let Error::Compilation { diagnostics, src } = err else {
            panic!("expected a compilation error, got {err:?}");
        };
        assert_eq!(src, "push 16");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.0, 5..7);
    }

    #[test]
    fn test_bad_jump_target_is_a_compilation_error() {
        let engine = Engine::default();
        let err = engine.load("jump 3\nstop").unwrap_err();
        assert!(matches!(err, Error::Compilation { .. }));
    }

    #[test]
    fn test_default_options_bound_runs() {
        let engine = Engine::new(EngineOptions {
            default_execution_options: ExecutionOptions::bounded(10),
        });
        let program = engine.load("print \"again\"\njump 1").unwrap();
        let err = engine.run(&program).unwrap_err();
        let Error::ResourceExceeded(limit) = err else {
            panic!("expected a resource error, got {err:?}");
        };
        assert_eq!(limit.max_steps, 10);
        assert_eq!(limit.output.len(), 5);
    }

    #[test]
    fn test_runtime_faults() {
        let engine = Engine::default();
        let program = engine.load("print \"x\"\npop\nstop").unwrap();
        let err = engine.run(&program).unwrap_err();
        assert!(matches!(err, Error::Runtime(_)));
        assert_eq!(err.partial_output().map(lines), Some(vec!["x"]));
    }
}
