use std::io::Write;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    executor::core::Program,
};

impl Program<'_> {
    /// Evaluates a `START_IF` statement.
    ///
    /// The condition is evaluated once. When it holds, the `IF` body runs and
    /// execution continues on the line after `END_IF`; if that line is a
    /// chained `START_ELSE`, the dispatcher skips it along with its body.
    /// When it does not hold, the chained `ELSE` body runs instead and
    /// execution continues after `END_ELSE`, or right after `END_IF` when
    /// there is no `ELSE`.
    ///
    /// # Parameters
    /// - `index`: Line index of the `START_IF`.
    /// - `condition`: The condition expression.
    /// - `context`: Variable environment.
    /// - `out`: Program output.
    ///
    /// # Returns
    /// The index of the next statement to run.
    ///
    /// # Example
    /// ```
    /// use blockscript::interpreter::{
    ///     evaluator::core::Context, executor::core::Program, value::Value,
    /// };
    ///
    /// let source = "ASSIGN x = 3
    /// START_IF x > 5
    /// PRINT x
    /// END_IF
    /// START_ELSE
    /// ASSIGN x = 0
    /// END_ELSE";
    /// let program = Program::parse(source).unwrap();
    /// let mut context = Context::new();
    /// let mut out = Vec::new();
    ///
    /// program.run(&mut context, &mut out).unwrap();
    ///
    /// assert!(out.is_empty());
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(0)));
    /// ```
    pub fn execute_if<W: Write>(&self,
                                index: usize,
                                condition: &str,
                                context: &mut Context,
                                out: &mut W)
                                -> EvalResult<usize> {
        let end_if = self.close_of(index)?;
        let holds = context.eval_expression(condition, index + 1)?.is_truthy();

        if holds {
            self.execute_body(index + 1, end_if, context, out)?;
            return Ok(end_if + 1);
        }

        match self.blocks().else_after(end_if) {
            Some(start_else) => {
                let end_else = self.close_of(start_else)?;
                self.execute_body(start_else + 1, end_else, context, out)?;
                Ok(end_else + 1)
            },
            None => Ok(end_if + 1),
        }
    }
}
