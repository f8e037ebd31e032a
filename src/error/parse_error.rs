#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before a statement executes.
///
/// These cover the structural pass over the whole program and the lexing of
/// individual expression lines.
pub enum ParseError {
    /// A `END_*` marker was found with no open block left to close.
    UnbalancedBlock {
        /// The close marker that was found.
        marker: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A `END_*` marker closed a block of a different kind.
    MismatchedBlock {
        /// The open marker on top of the block stack.
        opened: String,
        /// The close marker that was found.
        closed: String,
        /// The source line of the close marker.
        line:   usize,
    },
    /// The program ended while a block was still open.
    UnclosedBlock {
        /// The open marker that was never closed.
        marker: String,
        /// The source line of the open marker.
        line:   usize,
    },
    /// An all-digit literal does not fit in a 64 bit integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedBlock { marker, line } => {
                write!(f, "Error on line {line}: Unbalanced block: '{marker}' has no matching open marker.")
            },
            Self::MismatchedBlock { opened, closed, line } => write!(f,
                                                                    "Error on line {line}: Mismatched block: '{closed}' cannot close '{opened}'."),
            Self::UnclosedBlock { marker, line } => {
                write!(f, "Error on line {line}: Unclosed block: '{marker}' is never closed.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
