/// Statement dispatch and the program driver.
///
/// Holds the `Program` (line array plus block map) and the single-statement
/// dispatcher that every other executor module calls back into.
pub mod core;

/// `START_IF` / `START_ELSE` evaluation.
///
/// Runs exactly one of the two branches, using the block map to jump over
/// the branch that is not taken.
pub mod conditional;

/// `START_WHILE` and `START_FOR` evaluation.
///
/// Loops iterate by re-running their body range; only the statements inside
/// a body recurse into the dispatcher.
pub mod loops;
