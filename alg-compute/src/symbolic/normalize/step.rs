#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible normalization steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// A term that does not depend on `x` was replaced by its value.
    ///
    /// `+ 1 2 = 3`
    /// `* 0 x = 0`
    FoldConstant,

    /// Nested sums, additions and subtractions were inlined into a sum.
    ///
    /// `+[ a + b c ]+ = +[ a b c ]+`
    /// `+[ a - b c ]+ = +[ a b * -1 c ]+`
    FlattenSum,

    /// Nested products and multiplications were inlined into a product.
    ///
    /// `*[ a * b c ]* = *[ a b c ]*`
    FlattenProduct,

    /// `+ 0 a = a`
    /// `+ a 0 = a`
    AddZero,

    /// `* 1 a = a`
    /// `* a 1 = a`
    MultiplyOne,

    /// `- a 0 = a`
    SubZero,

    /// `- 0 a = * -1 a`
    ZeroMinus,

    /// `/ a c = *[ a 1/c ]*`
    DivideByConstant,

    /// `^ a 0 = 1`
    PowerZero,

    /// `^ a 1 = a`
    PowerOne,

    /// A power with a constant base became a scalar-to-term power.
    PowerBaseConstant,

    /// A power with a constant exponent became a term-to-scalar power.
    PowerExponentConstant,

    /// A conditional with constant comparands was replaced by the selected branch.
    SelectBranch,

    /// A sum or product with a single remaining element was replaced by that element.
    CollapseList,
}
