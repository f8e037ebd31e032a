#[derive(Debug)]
/// Represents all errors that abort a running program.
///
/// Recoverable conditions such as printing an unbound variable are reported
/// as diagnostics on the program output instead and never reach this type.
pub enum RuntimeError {
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to values it does not support.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression did not reduce to exactly one value, e.g. `- 5` or
    /// `2 3`.
    MalformedExpression {
        /// Details about what was missing or left over.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `FOR` bound is neither a bound variable nor an integer literal.
    InvalidLoopBound {
        /// The bound as written.
        bound: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A structural marker had no entry in the block map.
    MissingBlock {
        /// The source line of the marker.
        line: usize,
    },
    /// A lexical error surfaced while evaluating an expression line.
    Parse(crate::error::ParseError),
    /// Writing program output failed.
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line being executed.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::MalformedExpression { details, line } => {
                write!(f, "Error on line {line}: Malformed expression: {details}.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::InvalidLoopBound { bound, line } => write!(f,
                                                             "Error on line {line}: Loop bound '{bound}' is not an integer or a bound variable."),
            Self::MissingBlock { line } => {
                write!(f, "Error on line {line}: Marker has no matching block.")
            },
            Self::Parse(e) => write!(f, "{e}"),
            Self::Output { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<crate::error::ParseError> for RuntimeError {
    fn from(e: crate::error::ParseError) -> Self {
        Self::Parse(e)
    }
}
