//! Implementation of the simple reciprocal fraction

use super::{check_coefficient, reciprocal};
use crate::error::{Error, Stage};
use crate::traits::{Evaluate, Tolerance};
use std::fmt;

const NONZERO_RULE: &str = "must not be zero";

/// This struct represents the function `f(x) = 1 / (a*x)`
/// where the coefficient `a` is finite and not within the tolerance of zero
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleFraction<T> {
    a: T,
}

impl<T: Copy> SimpleFraction<T> {
    #[inline]
    pub fn a(&self) -> T {
        self.a
    }
}

impl<T: Tolerance + fmt::Display> SimpleFraction<T> {
    pub fn new(a: T) -> Result<Self, Error> {
        let a = check_coefficient("a", a, Self::accepts(a), NONZERO_RULE)?;
        Ok(SimpleFraction { a })
    }

    /// Whether `a` can be used as the coefficient
    #[inline]
    pub fn accepts(a: T) -> bool {
        a.is_finite() && !a.is_near_zero()
    }

    /// Replace the coefficient, keeping the old one if `a` is rejected
    pub fn set_a(&mut self, a: T) -> Result<(), Error> {
        self.a = check_coefficient("a", a, Self::accepts(a), NONZERO_RULE)?;
        Ok(())
    }
}

impl<T: Tolerance + fmt::Display> Evaluate<T> for SimpleFraction<T> {
    fn describe(&self) -> String {
        self.to_string()
    }

    fn evaluate(&self, x: T) -> Result<T, Error> {
        reciprocal(self.a * x, Stage::Simple)
    }
}

impl<T: fmt::Display> fmt::Display for SimpleFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = 1 / (a*x), a = {}", self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_test() {
        assert!(SimpleFraction::new(2.0).is_ok());
        assert!(SimpleFraction::new(-1e-6).is_ok());

        match SimpleFraction::new(0.0) {
            Err(Error::InvalidCoefficient { name, .. }) => assert_eq!(name, "a"),
            other => panic!("expected an invalid coefficient, got {:?}", other),
        }
        for &a in &[0.5e-12, -0.5e-12, f64::NAN, f64::INFINITY] {
            let result = SimpleFraction::new(a);
            assert!(matches!(result, Err(Error::InvalidCoefficient { .. })));
        }
    }

    #[test]
    fn evaluate_test() {
        let f = SimpleFraction::new(2.0f64).unwrap();
        assert_eq!(f.evaluate(5.0).unwrap(), 0.1);
        assert_eq!(format!("{:.4}", f.evaluate(5.0).unwrap()), "0.1000");

        for &(a, x) in &[(1.0f64, 1.0), (-3.5, 0.25), (1e-6, 7.0), (12.0, -0.01)] {
            let f = SimpleFraction::new(a).unwrap();
            assert_eq!(f.evaluate(x).unwrap(), 1.0 / (a * x));
        }

        match f.evaluate(0.0) {
            Err(Error::DivisionByZero { stage }) => assert_eq!(stage, Stage::Simple),
            other => panic!("expected a division by zero, got {:?}", other),
        }
        let tiny = f.evaluate(1e-13);
        assert!(matches!(tiny, Err(Error::DivisionByZero { .. })));
    }

    #[test]
    fn f32_test() {
        let f = SimpleFraction::new(4f32).unwrap();
        assert_eq!(f.evaluate(0.5f32).unwrap(), 0.5f32);
    }

    #[test]
    fn set_a_test() {
        let mut f = SimpleFraction::new(2.0).unwrap();
        f.set_a(-4.0).unwrap();
        assert_eq!(f.a(), -4.0);
        assert!(f.set_a(0.0).is_err());
        assert_eq!(f.a(), -4.0);
    }

    #[test]
    fn describe_test() {
        for &a in &[2.0f64, -0.125, 3.000001, 1e-6] {
            let text = SimpleFraction::new(a).unwrap().describe();
            assert!(text.contains(&a.to_string()), "{} should mention {}", text, a);
        }
        assert_eq!(
            SimpleFraction::new(2.5).unwrap().to_string(),
            "f(x) = 1 / (a*x), a = 2.5"
        );
    }
}
