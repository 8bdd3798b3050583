//! Symbolic manipulation of terms.
//!
//! # Constant-testing
//!
//! [`as_constant`] determines whether a term's value is independent of `x`, and if so, what that
//! value is. It is structural: `sin x` is never constant, even though `- sin x sin x` is always
//! zero. Algebraic identities beyond the normalization rules are not recognized.
//!
//! # Normalization
//!
//! [`normalize`] rewrites a term into a canonical shape: nested sums and products are flattened,
//! constants are folded into a single trailing scalar, identities are removed, and conditionals
//! with constant comparands are resolved. The normalized term evaluates to the same value as the
//! original wherever both are defined.
//!
//! ```
//! use alg_compute::symbolic::normalize;
//! use alg_parser::{parse_str, Term};
//!
//! let term = parse_str("+ * 0 x x").unwrap();
//! assert_eq!(normalize(&term), Term::Variable);
//! ```
//!
//! The rules that fired can be collected with [`normalize_with_steps`], which is useful for
//! showing the user how a result was obtained.
//!
//! # Differentiation
//!
//! [`derivative()`] computes the derivative with respect to `x` using the sum, product, quotient,
//! power and chain rules, and normalizes the result.
//!
//! All three operations are also available as methods through the [`Symbolic`] trait.

pub mod constant;
pub mod derivative;
pub mod normalize;
pub mod step_collector;

use alg_parser::Term;

pub use constant::as_constant;
pub use derivative::derivative;
pub use normalize::{normalize, normalize_with_steps, step::Step};
pub use step_collector::StepCollector;

/// Symbolic operations callable on a term.
pub trait Symbolic {
    /// Returns the value of the term if it does not depend on `x`. See [`as_constant`].
    fn as_constant(&self) -> Option<f64>;

    /// Returns the normalized form of the term. See [`normalize()`].
    fn normalize(&self) -> Term;

    /// Returns the normalized derivative of the term with respect to `x`. See [`derivative()`].
    fn derivative(&self) -> Term;
}

impl Symbolic for Term {
    fn as_constant(&self) -> Option<f64> {
        as_constant(self)
    }

    fn normalize(&self) -> Term {
        normalize(self)
    }

    fn derivative(&self) -> Term {
        derivative(self)
    }
}
