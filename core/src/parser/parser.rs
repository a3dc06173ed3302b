use ecow::EcoString;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::error::{ParseError, ParseErrorKind, convert_pest_error};
use super::syntax::Span;
use crate::vm::{Instruction, Line, LoadError, Program};
use crate::{String, ToString, Vec, Word};

#[derive(Parser)]
#[grammar = "parser/program.pest"]
pub struct ProgramParser;

/// An instruction together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub instruction: Instruction<Line>,
    /// The whole instruction, mnemonic to last operand.
    pub span: Span,
    /// The operand, for instructions that have one.
    pub operand_span: Option<Span>,
}

/// Parsed program text whose jump targets are not resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProgram<'a> {
    pub source: &'a str,
    pub instructions: Vec<ParsedInstruction>,
}

impl ParsedProgram<'_> {
    /// Resolves jump targets, reporting a bad target at the operand that
    /// names it.
    pub fn into_program(self) -> Result<Program, ParseError> {
        let Self {
            source,
            instructions,
        } = self;
        let spans: Vec<Span> = instructions
            .iter()
            .map(|parsed| parsed.operand_span.clone().unwrap_or(parsed.span.clone()))
            .collect();
        let authored = instructions
            .into_iter()
            .map(|parsed| parsed.instruction)
            .collect();

        Program::load(authored).map_err(|err| match err {
            LoadError::LineOutOfRange { index, line, len } => ParseError::new(
                ParseErrorKind::LineOutOfRange { line, len },
                source,
                spans.get(index).cloned().unwrap_or_default(),
            ),
            other => ParseError::new(
                ParseErrorKind::Other {
                    message: other.to_string(),
                },
                source,
                Span::default(),
            ),
        })
    }
}

/// Parses assembly text, one instruction per line.
pub fn parse(source: &str) -> Result<ParsedProgram<'_>, ParseError> {
    let mut pairs =
        ProgramParser::parse(Rule::program, source).map_err(|e| convert_pest_error(e, source))?;

    let mut instructions = Vec::new();
    if let Some(program) = pairs.next() {
        for pair in program.into_inner() {
            if pair.as_rule() == Rule::EOI {
                break;
            }
            instructions.push(parse_instruction(pair, source)?);
        }
    }

    tracing::debug!(instructions = instructions.len(), "parsed program text");
    Ok(ParsedProgram {
        source,
        instructions,
    })
}

fn parse_instruction(pair: Pair<Rule>, source: &str) -> Result<ParsedInstruction, ParseError> {
    let span = Span::from(pair.as_span());
    let rule = pair.as_rule();
    let operand = pair.into_inner().next();
    let operand_span = operand.as_ref().map(|p| Span::from(p.as_span()));

    let word = || parse_word(operand.as_ref(), source, &span);
    let line = || parse_line(operand.as_ref(), source, &span);

    let instruction = match rule {
        Rule::op_push => Instruction::Push(word()?),
        Rule::op_pop => Instruction::Pop,
        Rule::op_dup => Instruction::Dup,
        Rule::op_peek => Instruction::Peek,
        Rule::op_replace => Instruction::Replace(word()?),
        Rule::op_inc => Instruction::Inc,
        Rule::op_mod => Instruction::Mod(word()?),
        Rule::op_eq => Instruction::Eq(word()?),
        Rule::op_jump => Instruction::Jump(line()?),
        Rule::op_if_nzero => Instruction::IfNZero(line()?),
        Rule::op_print_head => Instruction::PrintHead,
        Rule::op_print => Instruction::Print(parse_string(operand.as_ref())),
        Rule::op_stop => Instruction::Stop,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::Other {
                    message: crate::format!("unexpected rule {:?}", rule),
                },
                source,
                span,
            ));
        }
    };

    Ok(ParsedInstruction {
        instruction,
        span,
        operand_span,
    })
}

fn missing_operand(source: &str, span: &Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: "missing operand".to_string(),
        },
        source,
        span.clone(),
    )
}

fn parse_word(pair: Option<&Pair<Rule>>, source: &str, span: &Span) -> Result<Word, ParseError> {
    let pair = pair.ok_or_else(|| missing_operand(source, span))?;
    let text = pair.as_str();
    let word = match text {
        "true" => Some(Word::TRUE),
        "false" => Some(Word::FALSE),
        digits => digits.parse::<u8>().ok().and_then(Word::new),
    };
    word.ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidWord {
                text: text.to_string(),
            },
            source,
            pair.as_span().into(),
        )
    })
}

fn parse_line(pair: Option<&Pair<Rule>>, source: &str, span: &Span) -> Result<Line, ParseError> {
    let pair = pair.ok_or_else(|| missing_operand(source, span))?;
    let text = pair.as_str();
    text.parse::<usize>().map(Line).map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidLine {
                text: text.to_string(),
            },
            source,
            pair.as_span().into(),
        )
    })
}

/// Unescapes the body of a string literal.
fn parse_string(pair: Option<&Pair<Rule>>) -> EcoString {
    let Some(text) = pair.and_then(|string| string.clone().into_inner().next()) else {
        return EcoString::new();
    };

    let mut out = String::new();
    let mut chars = text.as_str().chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out.into()
}
