/// Core evaluation logic and the variable environment.
///
/// Contains the runtime `Context` and the two-stack operator precedence
/// evaluator that reduces a token stream to a single value.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic with integer/real promotion and the comparison
/// operators.
pub mod binary;
