use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, relational and equality
    /// operators to `eval_comparison`.
    ///
    /// # Example
    /// ```
    /// use blockscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Integer(3),
    ///                                   &Value::Integer(4),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        if op.is_comparison() {
            Self::eval_comparison(op, left, right, line)
        } else {
            Self::eval_arithmetic(op, left, right, line)
        }
    }

    /// Evaluates `+`, `-`, `*`, `/` and `%`.
    ///
    /// Two integers stay integers, except under `/` which always produces a
    /// real. A real on either side promotes the other operand. Remainders
    /// take the sign of the divisor, so `-7 % 3` is `2`. Division and
    /// remainder by zero fail instead of producing infinity or NaN.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for a zero divisor.
    /// - `RuntimeError::Overflow` if integer arithmetic overflows.
    /// - `RuntimeError::TypeError` for boolean or string operands.
    #[allow(clippy::cast_precision_loss)]
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let (a, b) = (*a, *b);
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => {
                        if b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        return Ok(Real(a as f64 / b as f64));
                    },
                    Mod => {
                        if b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_rem(b)
                         .map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
                    },
                    _ => unreachable!("eval_arithmetic used with comparison operator"),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;

                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                a / b
                            },
                            Mod => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                let r = a % b;
                                if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
                            },
                            _ => unreachable!("eval_arithmetic used with comparison operator"),
                        }))
            },
            _ => Err(RuntimeError::TypeError { details: format!("cannot use {op} on {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               line }),
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers compare by value across integer and real, strings compare
    /// lexicographically and booleans with `false < true`. Values of
    /// different kinds are never equal; ordering them is a type error.
    ///
    /// # Example
    /// ```
    /// use blockscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let less = Context::eval_comparison(BinaryOperator::Less,
    ///                                     &Value::Integer(3),
    ///                                     &Value::Real(3.5),
    ///                                     1);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let equal = Context::eval_comparison(BinaryOperator::Equal,
    ///                                      &Value::Text("1".into()),
    ///                                      &Value::Integer(1),
    ///                                      1);
    /// assert_eq!(equal.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
        use Value::{Bool, Integer, Real, Text};

        let ordering = match (left, right) {
            (Integer(a), Integer(b)) => Some(a.cmp(b)),
            (Text(a), Text(b)) => Some(a.cmp(b)),
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                left.as_real(line)?.partial_cmp(&right.as_real(line)?)
            },
            _ if matches!(op, Equal | NotEqual) => None,
            _ => {
                return Err(RuntimeError::TypeError { details: format!("cannot compare {} {op} {}",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     line });
            },
        };

        Ok(Bool(match op {
                    Equal => ordering == Some(Ordering::Equal),
                    NotEqual => ordering != Some(Ordering::Equal),
                    Less => ordering == Some(Ordering::Less),
                    Greater => ordering == Some(Ordering::Greater),
                    LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                    GreaterEqual => {
                        matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                    },
                    _ => unreachable!("eval_comparison used with arithmetic operator"),
                }))
    }
}
