/// Parsing errors.
///
/// Defines the errors raised before a statement runs: the structural pass
/// that pairs block markers, and the lexing of expression lines.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all fatal errors raised while a program executes, such as
/// division by zero, type mismatches, malformed expressions or invalid loop
/// bounds.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
