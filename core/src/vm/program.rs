//! Loaded, immutable programs.

use core::fmt;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use super::address::{Address, Line};
use super::error::LoadError;
use super::instruction_set::Instruction;
use crate::{String, Vec, format};

/// A program whose jump targets have all been resolved and bounds-checked.
///
/// Programs are built once, through [`Program::load`] or from already-resolved
/// instructions via `TryFrom`, and never change afterwards. Every
/// [`Address`] inside a `Program` is guaranteed to index one of its
/// instructions.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Instruction>", into = "Vec<Instruction>")]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Resolves every authored line number and builds the program.
    ///
    /// Fails on the first jump whose line does not name one of the program's
    /// instructions.
    pub fn load(authored: Vec<Instruction<Line>>) -> Result<Self, LoadError> {
        let len = authored.len();
        let instructions = authored
            .into_iter()
            .enumerate()
            .map(|(index, instruction)| {
                instruction.try_map_target(|line| {
                    line.resolve(len)
                        .ok_or(LoadError::LineOutOfRange { index, line, len })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(len, "program loaded");
        Ok(Program { instructions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at `pc`, or `None` past the end of the program.
    #[inline]
    pub fn get(&self, pc: usize) -> Option<&Instruction> {
        self.instructions.get(pc)
    }
}

impl TryFrom<Vec<Instruction>> for Program {
    type Error = LoadError;

    fn try_from(instructions: Vec<Instruction>) -> Result<Self, Self::Error> {
        let len = instructions.len();
        for (index, instruction) in instructions.iter().enumerate() {
            if let Some(&address) = instruction.target() {
                if address.index() >= len {
                    return Err(LoadError::AddressOutOfRange {
                        index,
                        address: address.index(),
                        len,
                    });
                }
            }
        }
        Ok(Program { instructions })
    }
}

impl From<Program> for Vec<Instruction> {
    fn from(program: Program) -> Self {
        program.instructions
    }
}

/// Disassembly listing: 1-based line numbers, with labels on jump targets.
impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program {{")?;
        writeln!(f, "  len: {}", self.len())?;

        // First pass: collect all jump targets to determine which addresses need labels
        let jump_targets: HashSet<Address> = self
            .instructions
            .iter()
            .filter_map(|instr| instr.target().copied())
            .collect();

        // Assign label numbers to targets (sorted for deterministic output)
        let mut sorted_targets: Vec<_> = jump_targets.into_iter().collect();
        sorted_targets.sort();
        let label_map: HashMap<Address, usize> = sorted_targets
            .into_iter()
            .enumerate()
            .map(|(i, addr)| (addr, i))
            .collect();

        // Second pass: print instructions with labels
        writeln!(f, "  instructions:")?;
        for (index, instr) in self.instructions.iter().enumerate() {
            let address = Address::new_unchecked(index);
            let label_prefix = match label_map.get(&address) {
                Some(label_num) => format!("L{}:", label_num),
                None => String::new(),
            };

            match instr.target() {
                Some(target) => {
                    let target_label = label_map
                        .get(target)
                        .map(|l| format!("L{}", l))
                        .unwrap_or_else(|| format!("{}", target));
                    writeln!(
                        f,
                        "    {:4} {:>4}  {} (to {}, line {})",
                        address.line(),
                        label_prefix,
                        instr.opcode(),
                        target_label,
                        target.line()
                    )?;
                }
                None => writeln!(f, "    {:4} {:>4}  {}", address.line(), label_prefix, instr)?,
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec, word::Word};
    use pretty_assertions::assert_eq;

    fn w(v: u8) -> Word {
        Word::new(v).unwrap()
    }

    #[test]
    fn test_load_resolves_lines() {
        let program = Program::load(vec![
            Instruction::Push(w(1)),
            Instruction::IfNZero(Line(4)),
            Instruction::Jump(Line(1)),
            Instruction::Stop,
        ])
        .unwrap();

        assert_eq!(program.len(), 4);
        assert_eq!(program.get(1).and_then(|i| i.target()).map(|a| a.index()), Some(3));
        assert_eq!(program.get(2).and_then(|i| i.target()).map(|a| a.index()), Some(0));
        assert!(program.get(4).is_none());
    }

    #[test]
    fn test_load_rejects_unknown_lines() {
        let err = Program::load(vec![Instruction::Jump(Line(3)), Instruction::Stop]).unwrap_err();
        assert_eq!(
            err,
            LoadError::LineOutOfRange {
                index: 0,
                line: Line(3),
                len: 2
            }
        );

        let err = Program::load(vec![Instruction::Stop, Instruction::IfNZero(Line(0))]).unwrap_err();
        assert_eq!(
            err,
            LoadError::LineOutOfRange {
                index: 1,
                line: Line(0),
                len: 2
            }
        );
    }

    #[test]
    fn test_empty_program_loads() {
        let program = Program::load(Vec::new()).unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_try_from_resolved_checks_bounds() {
        let ok = Program::try_from(vec![Instruction::Jump(Address::new_unchecked(0))]);
        assert!(ok.is_ok());

        let err = Program::try_from(vec![
            Instruction::Stop,
            Instruction::Jump(Address::new_unchecked(5)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LoadError::AddressOutOfRange {
                index: 1,
                address: 5,
                len: 2
            }
        );
    }

    #[test]
    fn test_listing() {
        let program = Program::load(vec![
            Instruction::Push(w(1)),
            Instruction::PrintHead,
            Instruction::IfNZero(Line(5)),
            Instruction::Jump(Line(2)),
            Instruction::Stop,
        ])
        .unwrap();

        let listing = format!("{:?}", program);
        let expected = "\
Program {
  len: 5
  instructions:
       1       push 1
       2  L0:  printHead
       3       ifNZero (to L1, line 5)
       4       jump (to L0, line 2)
       5  L1:  stop
}";
        assert_eq!(listing, expected);
    }
}
