//! Error rendering using ariadne
//!
//! Parse and resolve errors are drawn against the program text with the
//! offending span underlined. Runtime and resource errors have no span and
//! are written as a single line.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<program>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use nibble::{Engine, EngineOptions, render_error};
///
/// let engine = Engine::new(EngineOptions::default());
/// if let Err(e) = engine.load("push 16") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compilation { diagnostics, src } => {
            render_diagnostics(src, diagnostics, writer, use_color)
        }
        Error::Load(err) => writeln!(writer, "Load error: {}", err),
        Error::Runtime(err) => writeln!(writer, "Runtime error: {}", err),
        Error::ResourceExceeded(err) => writeln!(writer, "Resource limit exceeded: {}", err),
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, EngineOptions};

    #[test]
    fn test_render_parse_error() {
        let engine = Engine::new(EngineOptions::default());

        let source = "push 1\npush 16\nstop";
        let result = engine.load(source);

        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(output.contains("Error"));
            assert!(output.contains("P002"));
            assert!(output.contains("push 16"));
            assert!(output.contains("Invalid word literal '16'"));
        }
    }

    #[test]
    fn test_render_bad_jump_target() {
        let engine = Engine::new(EngineOptions::default());

        let result = engine.load("jump 9\nstop");

        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);
            assert!(output.contains("Jump to line 9"));
            assert!(output.contains("Lines count instructions from 1"));
        }
    }

    #[test]
    fn test_render_division_by_zero() {
        let engine = Engine::new(EngineOptions::default());
        let program = engine.load("push 4\nmod 0\nstop").unwrap();

        let err = engine.run(&program).unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert_eq!(output, "Runtime error: division by zero (at line 2)\n");
    }

    #[test]
    fn test_render_stack_underflow() {
        let engine = Engine::new(EngineOptions::default());
        let program = engine.load("mod 3\nstop").unwrap();

        let err = engine.run(&program).unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert_eq!(output, "Runtime error: `mod` needs 1 stack word(s) but the stack holds 0 (at line 1)\n");
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let engine = Engine::new(EngineOptions::default());

        let result = engine.load("bogus {");

        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(!output.is_empty());
            assert!(output.lines().count() > 1);
        }
    }
}
