use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Variables are dynamically typed: one environment can hold integers,
/// quotients, booleans and strings side by side.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit integer, produced by literals and integer arithmetic.
    Integer(i64),
    /// A double precision number. Every `/` produces one, even when the
    /// division is exact.
    Real(f64),
    /// A boolean, produced by the comparison operators.
    Bool(bool),
    /// A string, produced only by `ASSIGN name = "..."`.
    Text(String),
}

impl Value {
    /// Returns the name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
        }
    }

    /// Decides whether a condition holds.
    ///
    /// Booleans are taken as-is, numbers hold when non-zero and strings hold
    /// when non-empty.
    ///
    /// # Example
    /// ```
    /// use blockscript::interpreter::value::Value;
    ///
    /// assert!(Value::Bool(true).is_truthy());
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Converts a numeric value to `f64`.
    ///
    /// # Errors
    /// `RuntimeError::TypeError` if the value is a boolean or a string.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(*n as f64),
            Self::Real(r) => Ok(*r),
            _ => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                               self.type_name()),
                                              line })
            },
        }
    }

    /// Converts the value of a variable used as a `FOR` bound to an integer.
    ///
    /// Reals are truncated toward zero, booleans count as `0` and `1`, and
    /// strings must hold an integer literal.
    ///
    /// # Parameters
    /// - `bound`: The bound as written in the loop header.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::InvalidLoopBound` if the value has no integer reading.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn as_loop_bound(&self, bound: &str, line: usize) -> EvalResult<i64> {
        let invalid = || RuntimeError::InvalidLoopBound { bound: bound.to_string(),
                                                          line };
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Real(r) => {
                let truncated = r.trunc();
                if truncated.is_finite()
                   && truncated >= i64::MIN as f64
                   && truncated < i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(invalid())
                }
            },
            Self::Text(s) => s.trim().parse().map_err(|_| invalid()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole quotients keep a trailing `.0` so `4 / 2` prints as `2.0`.
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 => {
                write!(f, "{r:.1}")
            },
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
