use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        executor::core::{Program, emit},
        lexer::tokenize,
        parser::parse_for_header,
        value::Value,
    },
};

impl Program<'_> {
    /// Evaluates a `START_WHILE` loop.
    ///
    /// The condition is checked before every iteration, the first one
    /// included, so a condition that starts out false never runs the body.
    /// A condition that never becomes false loops forever.
    ///
    /// # Returns
    /// The index of the line after `END_WHILE`.
    pub fn execute_while<W: Write>(&self,
                                   index: usize,
                                   condition: &str,
                                   context: &mut Context,
                                   out: &mut W)
                                   -> EvalResult<usize> {
        let line = index + 1;
        let end = self.close_of(index)?;
        let tokens = tokenize(condition, line)?;

        while context.eval(&tokens, line)?.is_truthy() {
            self.execute_body(index + 1, end, context, out)?;
        }

        Ok(end + 1)
    }

    /// Evaluates a `START_FOR <var> FROM <start> TO <end> BY <step>` loop.
    ///
    /// Each bound is the integer value of a bound variable or an integer
    /// literal, read once when the loop starts. The loop variable is set to
    /// `start` and advanced by `step` after every iteration while it stays
    /// within `end` (inclusive) in the direction of `step`. It keeps its last
    /// assigned value after the loop.
    ///
    /// A malformed header, a zero step or a step pointing away from `end`
    /// is reported on the output and the loop is skipped.
    ///
    /// # Errors
    /// `RuntimeError::InvalidLoopBound` if a bound has no integer reading.
    ///
    /// # Example
    /// ```
    /// use blockscript::interpreter::{
    ///     evaluator::core::Context, executor::core::Program, value::Value,
    /// };
    ///
    /// let program = Program::parse("START_FOR i FROM 3 TO 1 BY -1\nPRINT i\nEND_FOR").unwrap();
    /// let mut context = Context::new();
    /// let mut out = Vec::new();
    ///
    /// program.run(&mut context, &mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "3\n2\n1\n");
    /// assert_eq!(context.get_variable("i"), Some(&Value::Integer(1)));
    /// ```
    pub fn execute_for<W: Write>(&self,
                                 index: usize,
                                 header: &str,
                                 context: &mut Context,
                                 out: &mut W)
                                 -> EvalResult<usize> {
        let line = index + 1;
        let end_for = self.close_of(index)?;

        let Some(header) = parse_for_header(header) else {
            tracing::debug!(line, "invalid FOR header");
            emit(out, "Invalid FOR loop syntax", line)?;
            return Ok(end_for + 1);
        };

        let start = resolve_bound(context, header.start, line)?;
        let end = resolve_bound(context, header.end, line)?;
        let step = resolve_bound(context, header.step, line)?;

        if step == 0 {
            tracing::debug!(line, "FOR step is zero");
            emit(out, "Error: Increment value cannot be 0", line)?;
            return Ok(end_for + 1);
        }

        if (step > 0 && start > end) || (step < 0 && start < end) {
            tracing::debug!(line, start, end, step, "FOR step points away from the bound");
            emit(out,
                 "Warning: Loop start and end values indicate the loop will not execute due to \
                  the increment direction",
                 line)?;
            return Ok(end_for + 1);
        }

        let mut value = start;
        while (step > 0 && value <= end) || (step < 0 && value >= end) {
            context.set_variable(header.var, Value::Integer(value));
            self.execute_body(index + 1, end_for, context, out)?;

            match value.checked_add(step) {
                Some(next) => value = next,
                None => break,
            }
        }

        Ok(end_for + 1)
    }
}

/// Reads a `FOR` bound: the value of a bound variable, or else an integer
/// literal.
fn resolve_bound(context: &Context, bound: &str, line: usize) -> EvalResult<i64> {
    match context.get_variable(bound) {
        Some(value) => value.as_loop_bound(bound, line),
        None => bound.parse().map_err(|_| RuntimeError::InvalidLoopBound { bound: bound.to_string(),
                                                                          line }),
    }
}
