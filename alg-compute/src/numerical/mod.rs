//! Numerical evaluation of terms.
//!
//! Evaluation follows IEEE 754 semantics throughout: division by zero, logarithms of
//! non-positive numbers and similar domain errors are not reported, and instead produce
//! infinities or NaN that propagate through the rest of the term.

pub mod eval;
pub mod func;

pub use eval::Eval;
