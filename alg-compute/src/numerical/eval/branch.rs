use alg_parser::parser::ast::{Compare, Range};
use super::Eval;

/// Evaluates both comparands, then only the selected branch.
impl Eval for Compare {
    fn eval(&self, x: f64) -> f64 {
        self.select(self.lhs.eval(x), self.rhs.eval(x)).eval(x)
    }
}

/// Evaluates the value and both bounds, then only the selected branch.
impl Eval for Range {
    fn eval(&self, x: f64) -> f64 {
        self.select(self.value.eval(x), self.low.eval(x), self.high.eval(x)).eval(x)
    }
}
