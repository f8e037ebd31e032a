//! # blockscript
//!
//! blockscript is a tree-walking interpreter for a small line-oriented,
//! block-structured scripting language. Programs are one statement per line:
//! `ASSIGN`, `PRINT`, `START_IF`/`START_ELSE`, `START_WHILE` and
//! `START_FOR`, with every block closed by its `END_*` marker.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{evaluator::core::Context, executor::core::Program};

/// Defines the shapes of source lines and operators.
///
/// This module declares `Command`, the classification of one program line
/// by its leading keyword, and `BinaryOperator` with its precedence table.
pub mod ast;
/// Provides the error types for parsing and execution.
///
/// # Responsibilities
/// - Defines `ParseError` for structural and lexical failures found before
///   a statement runs.
/// - Defines `RuntimeError` for fatal failures while a program runs.
/// - Attaches the 1-based source line to every error.
pub mod error;
/// Orchestrates the execution of programs.
///
/// This module ties together the block mapper, the lexer, the evaluator, the
/// value types and the statement executor.
pub mod interpreter;

/// The FizzBuzz and countdown program used by `blockscript --sample`.
pub const SAMPLE_PROGRAM: &str = include_str!("sample.bs");

/// Runs a program in a fresh context and returns the final variable
/// environment.
///
/// Everything the program prints, diagnostics included, is written to
/// `out`, one line per `PRINT`.
///
/// # Errors
/// Returns the `ParseError` if the blocks of the program are malformed, or
/// the `RuntimeError` that aborted execution.
///
/// # Examples
/// ```
/// use blockscript::run;
///
/// let mut out = Vec::new();
/// run("ASSIGN greeting = \"hello\"\nPRINT greeting", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "hello\n");
///
/// // Division by zero aborts the program.
/// let mut out = Vec::new();
/// assert!(run("ASSIGN x = 10 / 0", &mut out).is_err());
/// ```
pub fn run<W: Write>(source: &str, out: &mut W) -> Result<Context, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_with_context(source, &mut context, out)?;
    Ok(context)
}

/// Runs a program against an existing context.
///
/// Variables already bound in `context` are visible to the program, and
/// everything the program assigns stays in `context` afterwards, including
/// when execution fails part way.
///
/// # Errors
/// Same as [`run`].
pub fn run_with_context<W: Write>(source: &str,
                                  context: &mut Context,
                                  out: &mut W)
                                  -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::parse(source)?;
    tracing::debug!(lines = program.lines().len(),
                    blocks = program.blocks().len(),
                    "program parsed");

    program.run(context, out)?;
    Ok(())
}
