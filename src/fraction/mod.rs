//! The two fraction variants and the closed sum type over them
//!
//! 1. [SimpleFraction][SimpleFraction] represents `1 / (a*x)`
//! 2. [ContinuedFraction][ContinuedFraction] represents `1 / (a1*x + 1/(a2*x + 1/(a3*x)))`
//! 3. [Fraction][Fraction] is the variant chosen at runtime, dispatching to one of the above

mod continued;
mod simple;

pub use continued::*;
pub use simple::*;

use crate::error::{Error, Stage};
use crate::traits::{Evaluate, Tolerance};
use std::fmt;

/// Reciprocal of a denominator, unless it lies within the tolerance of zero
#[inline]
fn reciprocal<T: Tolerance>(denominator: T, stage: Stage) -> Result<T, Error> {
    if denominator.is_near_zero() {
        Err(Error::DivisionByZero { stage })
    } else {
        Ok(denominator.recip())
    }
}

/// Pass the coefficient through if `accepted`, otherwise report the violated rule
fn check_coefficient<T: fmt::Display>(
    name: &'static str,
    value: T,
    accepted: bool,
    rule: &'static str,
) -> Result<T, Error> {
    if accepted {
        Ok(value)
    } else {
        Err(Error::InvalidCoefficient {
            name,
            value: value.to_string(),
            rule,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fraction<T> {
    Simple(SimpleFraction<T>),
    Continued(ContinuedFraction<T>),
}

impl<T> From<SimpleFraction<T>> for Fraction<T> {
    fn from(f: SimpleFraction<T>) -> Self {
        Fraction::Simple(f)
    }
}

impl<T> From<ContinuedFraction<T>> for Fraction<T> {
    fn from(f: ContinuedFraction<T>) -> Self {
        Fraction::Continued(f)
    }
}

impl<T: Tolerance + fmt::Display> Evaluate<T> for Fraction<T> {
    fn describe(&self) -> String {
        match self {
            Fraction::Simple(f) => f.describe(),
            Fraction::Continued(f) => f.describe(),
        }
    }

    fn evaluate(&self, x: T) -> Result<T, Error> {
        match self {
            Fraction::Simple(f) => f.evaluate(x),
            Fraction::Continued(f) => f.evaluate(x),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fraction::Simple(v) => fmt::Display::fmt(v, f),
            Fraction::Continued(v) => fmt::Display::fmt(v, f),
        }
    }
}
