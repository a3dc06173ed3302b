use clap::Parser;
use miette::{Diagnostic, Result};
use nibble::{Engine, EngineOptions, ExecutionOptions, render_error};
use nibble_core::vm::Output;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

/// Nibble - a 4-bit stack machine built from logic gates
#[derive(Parser, Debug)]
#[command(name = "nibble")]
#[command(about = "Run Nibble assembly programs", long_about = None)]
struct Args {
    /// Give up after this many instructions (runs until `stop` if not set)
    #[arg(long, value_name = "N")]
    max_steps: Option<usize>,

    /// Print the loaded program listing (for debugging)
    #[arg(long)]
    debug_program: bool,

    /// Program file to run, or `-` to read from stdin
    file: PathBuf,
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("could not read {}", .path.display())]
    #[diagnostic(code(nibble::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output")]
    #[diagnostic(code(nibble::write))]
    Write(#[source] std::io::Error),
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let result = if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|err| CliError::Read {
        path: path.to_path_buf(),
        source: err,
    })
}

fn print_output(output: &Output) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    for line in output {
        writeln!(stdout, "{}", line).map_err(CliError::Write)?;
    }
    stdout.flush().map_err(CliError::Write)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(EngineOptions {
        default_execution_options: ExecutionOptions {
            max_steps: args.max_steps,
        },
    });

    let source = read_source(&args.file)?;

    let program = match engine.load(&source) {
        Ok(program) => program,
        Err(e) => {
            render_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.debug_program {
        println!("=== Program ===");
        println!("{:?}", program);
        println!();
    }

    tracing::debug!(file = %args.file.display(), "running");
    match engine.run(&program) {
        Ok(output) => {
            print_output(&output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            // Whatever ran before the failure is still printed.
            if let Some(output) = e.partial_output() {
                print_output(output)?;
            }
            render_error(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
