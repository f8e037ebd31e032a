use std::collections::HashMap;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        lexer::{Token, tokenize},
        value::Value,
    },
};

/// Result type used by the evaluator and the executor.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This is the variable environment of one program run: a single flat
/// namespace shared by every block, created empty and mutated by `ASSIGN`
/// and `START_FOR`.
///
/// ## Usage
///
/// A `Context` is created once per run. Separate contexts never share
/// state, so independent programs can run side by side.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// A mapping from variable names to their current values.
    pub variables: HashMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Resolves a name inside an expression. Unbound names read as `0`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Value {
        self.get_variable(name).cloned().unwrap_or(Value::Integer(0))
    }

    /// Tokenizes and evaluates one expression line.
    ///
    /// # Parameters
    /// - `expression`: Expression text without its statement keyword.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use blockscript::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.eval_expression("2 + 3 * 4", 1).unwrap(), Value::Integer(14));
    /// assert_eq!(context.eval_expression("(2 + 3) * 4", 1).unwrap(), Value::Integer(20));
    /// assert!(context.eval_expression("10 / 0", 1).is_err());
    /// ```
    pub fn eval_expression(&self, expression: &str, line: usize) -> EvalResult<Value> {
        let tokens = tokenize(expression, line)?;
        self.eval(&tokens, line)
    }

    /// Evaluates an already tokenized expression from its first token.
    pub fn eval(&self, tokens: &[Token], line: usize) -> EvalResult<Value> {
        self.eval_tokens(tokens, 0, line).map(|(value, _)| value)
    }

    /// Evaluates tokens starting at `start` until the end of the stream or
    /// an unmatched `)`.
    ///
    /// Uses two stacks: operands and pending operators. Before an operator
    /// is pushed, every pending operator of greater or equal precedence is
    /// applied, so the operator stack always holds strictly increasing
    /// precedences and the final drain can apply it top-down. A `(` recurses
    /// and resumes scanning where the sub-expression stopped. Operands with
    /// no operator between them do not combine: `x = 5` has three operands
    /// and evaluates to `x`.
    ///
    /// # Parameters
    /// - `tokens`: Token stream of the whole expression.
    /// - `start`: Index of the first token to consume.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// The computed value and the index just past the consumed tokens.
    pub fn eval_tokens(&self,
                       tokens: &[Token],
                       start: usize,
                       line: usize)
                       -> EvalResult<(Value, usize)> {
        let mut operands: Vec<Value> = Vec::new();
        let mut operators: Vec<BinaryOperator> = Vec::new();
        let mut index = start;

        while index < tokens.len() {
            let token = &tokens[index];
            index += 1;

            match token {
                Token::Integer(n) => operands.push(Value::Integer(*n)),
                Token::Identifier(name) | Token::Stray(name) => operands.push(self.resolve(name)),
                Token::LParen => {
                    let (value, next) = self.eval_tokens(tokens, index, line)?;
                    operands.push(value);
                    index = next;
                },
                Token::RParen => break,
                operator => {
                    let Some(op) = operator.as_operator() else {
                        continue;
                    };
                    while let Some(&pending) = operators.last() {
                        if pending.precedence() < op.precedence() {
                            break;
                        }
                        operators.pop();
                        Self::apply(&mut operands, pending, line)?;
                    }
                    operators.push(op);
                },
            }
        }

        while let Some(op) = operators.pop() {
            Self::apply(&mut operands, op, line)?;
        }

        // Operands left over without an operator between them are ignored;
        // the first one is the result.
        if operands.len() > 1 {
            tracing::debug!(line, extra = operands.len() - 1, "ignoring unused operands");
        }
        let value = operands.into_iter().next().ok_or_else(|| {
                                                   RuntimeError::MalformedExpression { details: "expected a value".to_string(),
                                                                                       line }
                                               })?;

        Ok((value, index))
    }

    /// Pops two operands, applies `op` and pushes the result.
    fn apply(operands: &mut Vec<Value>, op: BinaryOperator, line: usize) -> EvalResult<()> {
        let missing = || RuntimeError::MalformedExpression { details: format!("operator {op} is missing an operand"),
                                                             line };
        let right = operands.pop().ok_or_else(missing)?;
        let left = operands.pop().ok_or_else(missing)?;

        operands.push(Self::eval_binary(op, &left, &right, line)?);
        Ok(())
    }
}
