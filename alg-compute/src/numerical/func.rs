use alg_parser::parser::ast::Func;

/// Applies the function to a value.
///
/// The reciprocal trigonometric and hyperbolic functions are computed as the reciprocal of their
/// counterparts, so `csc 0` is infinite, and so on.
pub fn apply(func: Func, value: f64) -> f64 {
    match func {
        Func::Exp => value.exp(),
        Func::Ln => value.ln(),
        Func::Sin => value.sin(),
        Func::Cos => value.cos(),
        Func::Tan => value.tan(),
        Func::Sec => value.cos().recip(),
        Func::Csc => value.sin().recip(),
        Func::Cot => value.tan().recip(),
        Func::Sinh => value.sinh(),
        Func::Cosh => value.cosh(),
        Func::Tanh => value.tanh(),
        Func::Sech => value.cosh().recip(),
        Func::Csch => value.sinh().recip(),
        Func::Coth => value.tanh().recip(),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use std::f64::consts::{E, FRAC_PI_4};
    use super::*;

    #[test]
    fn exp_and_ln() {
        assert_float_absolute_eq!(apply(Func::Exp, 1.0), E, 1e-12);
        assert_float_absolute_eq!(apply(Func::Ln, E), 1.0, 1e-12);
        assert!(apply(Func::Ln, -1.0).is_nan());
        assert_eq!(apply(Func::Ln, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn reciprocal_trig() {
        assert_float_absolute_eq!(apply(Func::Sec, 0.0), 1.0, 1e-12);
        assert_float_absolute_eq!(apply(Func::Cot, FRAC_PI_4), 1.0, 1e-12);
        assert_eq!(apply(Func::Csc, 0.0), f64::INFINITY);
    }

    #[test]
    fn reciprocal_hyperbolic() {
        assert_float_absolute_eq!(apply(Func::Sech, 0.0), 1.0, 1e-12);
        assert_float_absolute_eq!(apply(Func::Coth, 1.0), 1.0 / 1.0f64.tanh(), 1e-12);
        assert_eq!(apply(Func::Csch, 0.0), f64::INFINITY);
    }
}
