/// Numeric display helpers.
///
/// This module turns the `f64` results of the interpreter into the short
/// strings shown next to each line. Rounding to a fixed number of fractional
/// digits hides binary representation artifacts such as
/// `0.1 + 0.2 = 0.30000000000000004` without changing the arithmetic itself.
pub mod num;
