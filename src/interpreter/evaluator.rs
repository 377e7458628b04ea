/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to evaluated operands.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation entry points and the per-line context that carries
/// the scope and the results history.
pub mod core;

/// Name and line-reference resolution.
///
/// Looks variables up in the scope and resolves `#N` against the outcomes of
/// earlier lines.
pub mod lookup;
