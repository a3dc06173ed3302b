use alloc::string::ToString;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};
use crate::vm::Line;
use crate::{String, Vec, format, vec};

/// Parser error with the source it was raised against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Word literal outside 0..=15
    InvalidWord { text: String },
    /// Line number too large to represent
    InvalidLine { text: String },
    /// Jump target that names no instruction
    LineOutOfRange { line: Line, len: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        Self {
            kind,
            source: source.to_string(),
            span,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                "P001",
                vec![],
            ),
            ParseErrorKind::InvalidWord { text } => (
                format!("Invalid word literal '{}'", text),
                "P002",
                vec!["Words are 4 bits wide: use 0 to 15, `true` or `false`".to_string()],
            ),
            ParseErrorKind::InvalidLine { text } => (
                format!("Invalid line number '{}'", text),
                "P003",
                vec![],
            ),
            ParseErrorKind::LineOutOfRange { line, len } => (
                format!(
                    "Jump to line {}, but the program has {} instruction(s)",
                    line, len
                ),
                "P004",
                vec![
                    "Lines count instructions from 1; blank and comment lines are not counted"
                        .to_string(),
                ],
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &diagnostic.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl core::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: format_found(source, span.0.start, &negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source, span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::word => "a word (0 to 15, `true` or `false`)",
            Rule::line => "a line number",
            Rule::string => "a quoted string",
            Rule::EOI => "end of input",
            _ => "an instruction",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe what the parser ran into at `pos`
fn format_found(source: &str, pos: usize, rules: &[Rule]) -> String {
    if let Some(rule) = rules.first() {
        return format!("{:?}", rule);
    }

    let rest = source.get(pos..).unwrap_or_default();
    let token: String = rest
        .chars()
        .take_while(|c| !c.is_whitespace())
        .take(16)
        .collect();
    if token.is_empty() {
        match rest.chars().next() {
            None => "end of input".to_string(),
            Some('\n' | '\r') => "end of line".to_string(),
            Some(_) => "whitespace".to_string(),
        }
    } else {
        format!("'{}'", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "an instruction".to_string(),
                found: "'bogus'".to_string(),
            },
            "bogus",
            Span(0..0),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.message, "Expected an instruction, found 'bogus'");
        assert_eq!(diagnostic.code, Some("P001".to_string()));
    }

    #[test]
    fn test_display_includes_code_and_help() {
        let error = ParseError::new(
            ParseErrorKind::InvalidWord {
                text: "16".to_string(),
            },
            "push 16",
            Span(5..7),
        );
        assert_eq!(
            error.to_string(),
            "error: Invalid word literal '16' [P002]\n\
             help: Words are 4 bits wide: use 0 to 15, `true` or `false`"
        );
    }

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[]), "something else");
        assert_eq!(format_expected_rules(&[Rule::line]), "a line number");
        assert_eq!(
            format_expected_rules(&[Rule::op_push, Rule::op_pop, Rule::EOI]),
            "an instruction or end of input"
        );
    }

    #[test]
    fn test_format_found() {
        assert_eq!(format_found("push x", 5, &[]), "'x'");
        assert_eq!(format_found("push", 4, &[]), "end of input");
        assert_eq!(format_found("push\n", 4, &[]), "end of line");
    }
}
