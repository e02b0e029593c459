//! Implementation of the three-level continued fraction

use super::{check_coefficient, reciprocal};
use crate::error::{Error, Stage};
use crate::traits::{Evaluate, Tolerance};
use std::fmt;

const NOT_THREE_RULE: &str = "must not be 3";

/// This struct represents the function `f(x) = 1 / (a1*x + 1/(a2*x + 1/(a3*x)))`
/// where none of the coefficients lies within the tolerance of 3
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuedFraction<T> {
    a1: T,
    a2: T,
    a3: T,
}

impl<T: Copy> ContinuedFraction<T> {
    /// Coefficients from the outermost level to the innermost one
    #[inline]
    pub fn coeffs(&self) -> [T; 3] {
        [self.a1, self.a2, self.a3]
    }
}

impl<T: Tolerance + fmt::Display> ContinuedFraction<T> {
    pub fn new(a1: T, a2: T, a3: T) -> Result<Self, Error> {
        Ok(ContinuedFraction {
            a1: Self::check("a1", a1)?,
            a2: Self::check("a2", a2)?,
            a3: Self::check("a3", a3)?,
        })
    }

    /// Whether `a` can be used at any level of the fraction
    #[inline]
    pub fn accepts(a: T) -> bool {
        let three = T::one() + T::one() + T::one();
        a.is_finite() && !a.is_near(three)
    }

    #[inline]
    fn check(name: &'static str, a: T) -> Result<T, Error> {
        check_coefficient(name, a, Self::accepts(a), NOT_THREE_RULE)
    }

    pub fn set_a1(&mut self, a1: T) -> Result<(), Error> {
        self.a1 = Self::check("a1", a1)?;
        Ok(())
    }

    pub fn set_a2(&mut self, a2: T) -> Result<(), Error> {
        self.a2 = Self::check("a2", a2)?;
        Ok(())
    }

    pub fn set_a3(&mut self, a3: T) -> Result<(), Error> {
        self.a3 = Self::check("a3", a3)?;
        Ok(())
    }
}

impl<T: Tolerance + fmt::Display> Evaluate<T> for ContinuedFraction<T> {
    fn describe(&self) -> String {
        self.to_string()
    }

    // evaluated inside out, every level guards its own denominator
    fn evaluate(&self, x: T) -> Result<T, Error> {
        let inner = reciprocal(self.a3 * x, Stage::Inner)?;
        let middle = reciprocal(self.a2 * x + inner, Stage::Middle)?;
        reciprocal(self.a1 * x + middle, Stage::Outer)
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f(x) = 1 / (a1*x + 1 / (a2*x + 1 / (a3*x))), a1 = {}, a2 = {}, a3 = {}",
            self.a1, self.a2, self.a3
        )
    }
}
