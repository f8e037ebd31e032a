use std::{fmt::Display, io::Write};

use crate::{
    ast::Command,
    error::RuntimeError,
    interpreter::{
        blocks::BlockMap,
        evaluator::core::{Context, EvalResult},
        parser::ParseResult,
        value::Value,
    },
};

/// Printed by `EASTER_EGG`.
pub const EASTER_EGG_MESSAGE: &str = "🐰 You found the Easter Egg! 🥚🌷";

/// A program ready to run: its source lines and their block map.
///
/// The line index is the program counter. Lines are never modified once the
/// program is built.
#[derive(Debug, Clone)]
pub struct Program<'src> {
    lines:  Vec<&'src str>,
    blocks: BlockMap,
}

impl<'src> Program<'src> {
    /// Splits `source` into lines and builds the block map.
    ///
    /// # Errors
    /// Any structural `ParseError` raised by `BlockMap::build`.
    pub fn parse(source: &'src str) -> ParseResult<Self> {
        let lines: Vec<&str> = source.lines().collect();
        let blocks = BlockMap::build(&lines)?;

        Ok(Self { lines, blocks })
    }

    /// The source lines, indexed by program counter.
    #[must_use]
    pub fn lines(&self) -> &[&'src str] {
        &self.lines
    }

    /// The jump table built for this program.
    #[must_use]
    pub const fn blocks(&self) -> &BlockMap {
        &self.blocks
    }

    /// Runs the whole program from line 0.
    ///
    /// Each step dispatches one statement and continues at the index it
    /// returns, until the index runs past the last line.
    ///
    /// # Example
    /// ```
    /// use blockscript::interpreter::{
    ///     evaluator::core::Context, executor::core::Program, value::Value,
    /// };
    ///
    /// let program = Program::parse("ASSIGN x = 2\nASSIGN y = x * 21\nPRINT y").unwrap();
    /// let mut context = Context::new();
    /// let mut out = Vec::new();
    ///
    /// program.run(&mut context, &mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
    /// assert_eq!(context.get_variable("y"), Some(&Value::Integer(42)));
    /// ```
    pub fn run<W: Write>(&self, context: &mut Context, out: &mut W) -> EvalResult<()> {
        let mut index = 0;
        while index < self.lines.len() {
            index = self.execute(index, context, out)?;
        }
        Ok(())
    }

    /// Executes the statement at `index` and returns the index of the next
    /// statement to run.
    ///
    /// Block statements run their whole construct, nested statements
    /// included, before returning. Close markers reached here are no-ops,
    /// and a `START_ELSE` reached here belongs to a conditional whose `IF`
    /// branch already ran, so it jumps past its `END_ELSE`.
    pub fn execute<W: Write>(&self,
                             index: usize,
                             context: &mut Context,
                             out: &mut W)
                             -> EvalResult<usize> {
        let Some(source) = self.lines.get(index) else {
            return Ok(index + 1);
        };
        let line = index + 1;
        let command = Command::parse(source);

        tracing::trace!(line, ?command, "dispatch");

        match command {
            Command::Blank
            | Command::EndIf
            | Command::EndElse
            | Command::EndWhile
            | Command::EndFor => Ok(index + 1),
            Command::Assign { name, value } => {
                Self::execute_assign(name, value, line, context)?;
                Ok(index + 1)
            },
            Command::Print { name } => {
                match context.get_variable(name) {
                    Some(value) => emit(out, value, line)?,
                    None => {
                        tracing::debug!(line, name, "print of unbound variable");
                        emit(out, "Error: Variable not found", line)?;
                    },
                }
                Ok(index + 1)
            },
            Command::StartIf { condition } => self.execute_if(index, condition, context, out),
            Command::StartElse => Ok(self.close_of(index)? + 1),
            Command::StartWhile { condition } => {
                self.execute_while(index, condition, context, out)
            },
            Command::StartFor { header } => self.execute_for(index, header, context, out),
            Command::EasterEgg => {
                emit(out, EASTER_EGG_MESSAGE, line)?;
                Ok(index + 1)
            },
            Command::Unknown(text) => {
                tracing::debug!(line, text, "unknown command");
                emit(out, format_args!("Unknown command: {text}"), line)?;
                Ok(index + 1)
            },
        }
    }

    /// Stores the right hand side of an `ASSIGN`.
    ///
    /// A right hand side that starts and ends with `"` is stored as a string
    /// without its quotes (a lone `"` is the empty string), an all-digit one
    /// as an integer, and anything else is evaluated as an expression.
    fn execute_assign(name: &str, value: &str, line: usize, context: &mut Context) -> EvalResult<()> {
        let value = if value.starts_with('"') && value.ends_with('"') {
            Value::Text(value.get(1..value.len() - 1).unwrap_or_default().to_string())
        } else if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            // Too large for i64: let the lexer report it.
            match value.parse() {
                Ok(n) => Value::Integer(n),
                Err(_) => context.eval_expression(value, line)?,
            }
        } else {
            context.eval_expression(value, line)?
        };

        context.set_variable(name, value);
        Ok(())
    }

    /// Runs every statement in `start..end`, one dispatch at a time.
    pub(crate) fn execute_body<W: Write>(&self,
                                         start: usize,
                                         end: usize,
                                         context: &mut Context,
                                         out: &mut W)
                                         -> EvalResult<()> {
        let mut index = start;
        while index < end {
            index = self.execute(index, context, out)?;
        }
        Ok(())
    }

    /// Returns the partner of the marker at `index`.
    pub(crate) fn close_of(&self, index: usize) -> EvalResult<usize> {
        self.blocks
            .partner(index)
            .ok_or(RuntimeError::MissingBlock { line: index + 1 })
    }
}

/// Writes one line of program output.
pub(crate) fn emit<W: Write>(out: &mut W, message: impl Display, line: usize) -> EvalResult<()> {
    writeln!(out, "{message}").map_err(|source| RuntimeError::Output { source, line })
}
