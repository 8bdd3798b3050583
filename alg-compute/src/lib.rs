//! Numerical evaluation and symbolic manipulation of [`Term`](alg_parser::Term) trees.
//!
//! The [`numerical`] module evaluates a term at a point. The [`symbolic`] module tests terms for
//! constancy, normalizes them into a canonical shape, and computes their derivatives with respect
//! to `x`.
//!
//! ```
//! use alg_compute::{numerical::Eval, symbolic::Symbolic};
//! use alg_parser::parse_str;
//!
//! let term = parse_str("* sin x 3").unwrap();
//! let derivative = term.derivative();
//! assert_eq!(derivative.to_string(), "* cos x 3.00 ");
//! assert_eq!(derivative.eval(0.0), 3.0);
//! ```

pub mod numerical;
pub mod symbolic;

mod proptests;

/// Runs `f`, first moving to a new stack segment if little of the current one is left.
///
/// Every recursive walk over a [`Term`](alg_parser::Term) goes through this, so the depth of a
/// term is limited by memory rather than by the size of the thread's stack.
pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(64 * 1024, 2 * 1024 * 1024, f)
}
