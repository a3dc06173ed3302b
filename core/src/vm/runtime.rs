use ecow::eco_format;

use super::instruction_set::{Instruction, Opcode};
use super::{Output, Program, Stack, VmError, VmErrorKind};
use crate::{Vec, alu, word::Word};

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The instruction completed and the program counter moved on.
    Continue,
    /// `stop` executed; the output is final.
    Halted,
}

/// A copy of the execution state between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pc: usize,
    /// Top of the stack first.
    pub stack: Vec<Word>,
    pub output: Output,
    pub halted: bool,
}

/// Fetch-decode-execute loop over a loaded [`Program`].
///
/// The VM borrows the program read-only and owns its stack and output. It
/// starts at instruction 0 with both empty and runs until `stop`; there is no
/// built-in step limit, so a program that never stops never returns from
/// [`Vm::run`]. Callers that need a bound can drive [`Vm::step`] themselves,
/// as [`crate::api::run_bounded`] does.
pub struct Vm<'p> {
    program: &'p Program,
    pc: usize,
    stack: Stack<Word>,
    output: Output,
    halted: bool,
}

impl<'p> Vm<'p> {
    pub fn new(program: &'p Program) -> Self {
        Vm {
            program,
            pc: 0,
            stack: Stack::new(),
            output: Output::new(),
            halted: false,
        }
    }

    #[inline]
    pub fn pc(&self) -> usize {
        self.pc
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Output appended so far.
    #[inline]
    pub fn output(&self) -> &[ecow::EcoString] {
        &self.output
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            stack: self.stack.iter().copied().collect(),
            output: self.output.clone(),
            halted: self.halted,
        }
    }

    /// Gives up the VM, returning whatever output it has produced.
    pub fn into_output(self) -> Output {
        self.output
    }

    /// Runs until `stop` executes.
    pub fn run(mut self) -> Result<Output, VmError> {
        while self.step()? == Tick::Continue {}
        Ok(self.output)
    }

    /// Executes one instruction.
    ///
    /// Faults are detected before the instruction has any effect, so the
    /// state after an `Err` is the state before the faulting tick. Once
    /// halted, further calls do nothing and return [`Tick::Halted`].
    pub fn step(&mut self) -> Result<Tick, VmError> {
        if self.halted {
            return Ok(Tick::Halted);
        }

        let program = self.program;
        let Some(instruction) = program.get(self.pc) else {
            return Err(self.fault(VmErrorKind::PcOutOfBounds { len: program.len() }));
        };
        let opcode = instruction.opcode();
        self.require(opcode)?;

        tracing::trace!(pc = self.pc, %opcode, depth = self.stack.len(), "tick");

        let mut next = self.pc + 1;
        match instruction {
            Instruction::Push(word) => self.stack.push(*word),
            Instruction::Pop => {
                self.stack.pop();
            }
            Instruction::Dup => {
                self.stack.dup();
            }
            Instruction::Peek => {
                self.stack.dup_at(1);
            }
            Instruction::Replace(word) => self.stack[0] = *word,
            Instruction::Inc => self.stack[0] = alu::add(self.stack[0], Word::ONE),
            Instruction::Mod(divisor) => match alu::modulo(self.stack[0], *divisor) {
                Some(remainder) => self.stack[0] = remainder,
                None => return Err(self.fault(VmErrorKind::DivisionByZero)),
            },
            Instruction::Eq(word) => {
                let equal = alu::eq(self.stack[0], *word);
                self.stack.push(equal);
            }
            Instruction::Jump(target) => next = target.index(),
            Instruction::IfNZero(target) => {
                if let Some(head) = self.stack.pop() {
                    if !head.is_zero() {
                        next = target.index();
                    }
                }
            }
            Instruction::PrintHead => {
                let head = self.stack[0];
                self.output.push(eco_format!("{}", head));
            }
            Instruction::Print(text) => self.output.push(text.clone()),
            Instruction::Stop => {
                self.halted = true;
                tracing::debug!(pc = self.pc, lines = self.output.len(), "halted");
                return Ok(Tick::Halted);
            }
        }

        self.pc = next;
        Ok(Tick::Continue)
    }

    /// Checks the stack holds enough words for `opcode`.
    fn require(&self, opcode: Opcode) -> Result<(), VmError> {
        let needed = opcode.stack_inputs();
        let found = self.stack.len();
        if found < needed {
            return Err(self.fault(VmErrorKind::StackUnderflow {
                opcode,
                needed,
                found,
            }));
        }
        Ok(())
    }

    fn fault(&self, kind: VmErrorKind) -> VmError {
        tracing::debug!(pc = self.pc, %kind, "fault");
        VmError {
            kind,
            pc: self.pc,
            output: self.output.clone(),
        }
    }
}

/// Runs `program` from the initial state until it stops.
///
/// There is no step limit: a program that never executes `stop` never returns.
/// Use [`crate::api::run_bounded`] to impose one.
pub fn run(program: &Program) -> Result<Output, VmError> {
    Vm::new(program).run()
}
