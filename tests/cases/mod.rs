use nibble::{Engine, EngineOptions, Error, ExecutionOptions};
use once_cell::sync::Lazy;

/// Every program in these tests finishes well within this many ticks.
pub const MAX_STEPS: usize = 10_000;

pub static ENGINE: Lazy<Engine> = Lazy::new(|| {
    Engine::new(EngineOptions {
        default_execution_options: ExecutionOptions::bounded(MAX_STEPS),
    })
});

/// Loads and runs `source`, returning the printed lines.
pub fn run(source: &str) -> Result<Vec<String>, Error> {
    let program = ENGINE.load(source)?;
    let output = ENGINE.run(&program)?;
    Ok(output.iter().map(|line| line.to_string()).collect())
}

/// Declares a test that runs a program and checks what it printed, or how it
/// failed.
#[macro_export]
macro_rules! program_case {
    (
        $name:ident,
        input: $input:expr,
        output: [$($line:expr),* $(,)?] $(,)?
    ) => {
        #[test]
        fn $name() {
            let output = cases::run($input)
                .unwrap_or_else(|e| panic!("{}", nibble::render_error_to_string_no_color(&e)));
            let expected: Vec<&str> = vec![$($line),*];
            pretty_assertions::assert_eq!(output, expected);
        }
    };
    (
        $name:ident,
        input: $input:expr,
        error: $pattern:pat $(if $guard:expr)? $(,)?
    ) => {
        #[test]
        fn $name() {
            let err = cases::run($input).expect_err("expected the program to fail");
            assert!(
                matches!(err, $pattern $(if $guard)?),
                "unexpected error: {:?}",
                err
            );
        }
    };
}
