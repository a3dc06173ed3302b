//! Step-bounded execution.
//!
//! The VM itself never gives up on a program. This runner drives it one tick
//! at a time and abandons the run once a budget is spent, reporting that as a
//! resource error rather than a VM fault.

use thiserror::Error;

use crate::vm::{Output, Program, Tick, Vm, VmError};

/// The run did not reach `stop` within the allowed number of ticks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("program did not stop within {max_steps} step(s)")]
pub struct StepLimitExceeded {
    pub max_steps: usize,
    /// Output appended before the run was abandoned.
    pub output: Output,
}

/// Failure of a bounded run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The VM faulted.
    #[error(transparent)]
    Vm(#[from] VmError),

    /// The step budget ran out.
    #[error(transparent)]
    ResourceExceeded(#[from] StepLimitExceeded),
}

impl ExecutionError {
    pub fn output(&self) -> &Output {
        match self {
            ExecutionError::Vm(err) => &err.output,
            ExecutionError::ResourceExceeded(err) => &err.output,
        }
    }
}

/// Runs `program` for at most `max_steps` ticks.
///
/// Every executed instruction counts as one tick, `stop` included, so a
/// program that needs exactly `n` ticks succeeds with `max_steps == n`.
pub fn run_bounded(program: &Program, max_steps: usize) -> Result<Output, ExecutionError> {
    let mut vm = Vm::new(program);
    for _ in 0..max_steps {
        if vm.step()? == Tick::Halted {
            return Ok(vm.into_output());
        }
    }

    tracing::warn!(max_steps, pc = vm.pc(), "step limit exceeded");
    Err(StepLimitExceeded {
        max_steps,
        output: vm.into_output(),
    }
    .into())
}
