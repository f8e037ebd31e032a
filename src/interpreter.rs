/// The block mapper.
///
/// Pairs every `START_*` marker with its `END_*` marker in one linear,
/// stack-based pass over the program and chains `END_IF` to an immediately
/// following `START_ELSE`. The resulting map is the executor's jump table.
///
/// # Responsibilities
/// - Links matched open/close markers in both directions.
/// - Rejects unbalanced, mismatched and unclosed blocks before anything runs.
pub mod blocks;
/// The evaluator module reduces expression lines to values.
///
/// Evaluation uses operator precedence with an operand stack and an operator
/// stack, recursing on parentheses. It also owns the `Context`, the flat
/// variable environment shared by the whole program.
///
/// # Responsibilities
/// - Applies arithmetic and comparison operators with numeric promotion.
/// - Resolves variable names, reading unbound names as `0`.
/// - Reports division by zero, type errors and malformed expressions.
pub mod evaluator;
/// The executor module walks the program text.
///
/// Statements are dispatched one line at a time. Block statements run their
/// bodies by recursive dispatch and use the block map to jump past markers.
///
/// # Responsibilities
/// - Implements `ASSIGN`, `PRINT`, conditionals, `WHILE` and `FOR`.
/// - Writes program output and non-fatal diagnostics.
/// - Drives a whole program from its first line to its last.
pub mod executor;
/// The lexer module tokenizes expression lines.
///
/// Produces integer literals, identifiers, operators and parentheses.
/// Whitespace only separates tokens.
pub mod lexer;
/// Line classification helpers shared by the block mapper and the executor.
pub mod parser;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum: integer, real, boolean and string.
/// - Decides truthiness of conditions and reads `FOR` bounds.
/// - Formats values for `PRINT`.
pub mod value;
