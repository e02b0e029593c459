//! The interactive menu loop
//!
//! Every pass goes `Menu -> Collect -> Build -> Evaluate -> Report -> Menu`. A
//! fraction that fails to build skips `Evaluate`, an invalid choice goes straight
//! back to `Menu` and choosing `0` (or closing the input) leaves the loop.

use crate::error::Error;
use crate::fraction::{ContinuedFraction, Fraction, SimpleFraction};
use crate::input::{read_line, read_validated_number, Constraint};
use crate::report::{print_error, print_result};
use crate::traits::Evaluate;
use std::io::BufRead;
use termcolor::WriteColor;
use tracing::{debug, info, warn};

const MENU: &str = "\
Choose a function to evaluate:
  1. Simple fraction      f(x) = 1 / (a*x)
  2. Continued fraction   f(x) = 1 / (a1*x + 1 / (a2*x + 1 / (a3*x)))
  0. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Simple,
    Continued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Fraction(Kind),
    Exit,
}

impl Choice {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Choice::Fraction(Kind::Simple)),
            "2" => Some(Choice::Fraction(Kind::Continued)),
            "0" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Coefficients typed for one of the variants, not validated yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficients {
    Simple(f64),
    /// Outermost level first
    Continued([f64; 3]),
}

impl Coefficients {
    pub fn build(self) -> Result<Fraction<f64>, Error> {
        match self {
            Coefficients::Simple(a) => SimpleFraction::new(a).map(Fraction::from),
            Coefficients::Continued([a1, a2, a3]) => {
                ContinuedFraction::new(a1, a2, a3).map(Fraction::from)
            }
        }
    }
}

#[derive(Debug)]
enum State {
    Menu,
    Collect(Kind),
    Build(Coefficients),
    Evaluate(Fraction<f64>),
    Report(Result<f64, Error>),
    Exit,
}

/// Run the menu until the exit choice is made or the input ends
pub fn run<R: BufRead, W: WriteColor>(input: &mut R, output: &mut W) -> Result<(), Error> {
    info!("menu loop started");
    let mut state = State::Menu;
    loop {
        state = match step(state, input, output) {
            Ok(State::Exit) => break,
            Ok(next) => next,
            Err(Error::EndOfInput) => {
                info!("input closed");
                break;
            }
            Err(e) => return Err(e),
        };
    }
    info!("menu loop finished");
    Ok(())
}

fn step<R: BufRead, W: WriteColor>(
    state: State,
    input: &mut R,
    output: &mut W,
) -> Result<State, Error> {
    let next = match state {
        State::Menu => {
            writeln!(output, "{}", MENU)?;
            let key = read_line(input, output, "Your choice: ")?;
            match Choice::from_key(&key) {
                Some(Choice::Exit) => State::Exit,
                Some(Choice::Fraction(kind)) => {
                    debug!(?kind, "fraction chosen");
                    State::Collect(kind)
                }
                None => {
                    debug!(key = %key, "invalid menu choice");
                    writeln!(output, "Invalid choice, please try again.")?;
                    writeln!(output)?;
                    State::Menu
                }
            }
        }
        State::Collect(kind) => State::Build(collect(kind, input, output)?),
        State::Build(coeffs) => match coeffs.build() {
            Ok(fraction) => State::Evaluate(fraction),
            Err(e) => {
                warn!(error = %e, ?coeffs, "construction failed");
                State::Report(Err(e))
            }
        },
        State::Evaluate(fraction) => {
            writeln!(output, "{}", fraction.describe())?;
            let x = read_validated_number(input, output, "x = ", None)?;
            let outcome = fraction.evaluate(x);
            if let Err(e) = &outcome {
                warn!(error = %e, x, "evaluation failed");
            }
            State::Report(outcome)
        }
        State::Report(outcome) => {
            match outcome {
                Ok(value) => {
                    debug!(value, "evaluated");
                    print_result(output, value)?;
                }
                Err(e) => print_error(output, &e)?,
            }
            writeln!(output)?;
            State::Menu
        }
        State::Exit => State::Exit,
    };
    Ok(next)
}

/// Ask for the coefficients of `kind`, re-asking for values the variant rejects
fn collect<R: BufRead, W: WriteColor>(
    kind: Kind,
    input: &mut R,
    output: &mut W,
) -> Result<Coefficients, Error> {
    match kind {
        Kind::Simple => {
            let accepts = SimpleFraction::<f64>::accepts;
            let constraint = Constraint {
                accepts: &accepts,
                message: "a must not be zero",
            };
            let a = read_validated_number(input, output, "a = ", Some(&constraint))?;
            Ok(Coefficients::Simple(a))
        }
        Kind::Continued => {
            let accepts = ContinuedFraction::<f64>::accepts;
            let mut coeffs = [0.0; 3];
            for (i, slot) in coeffs.iter_mut().enumerate() {
                let prompt = format!("a{} = ", i + 1);
                let message = format!("a{} must not be 3", i + 1);
                let constraint = Constraint {
                    accepts: &accepts,
                    message: &message,
                };
                *slot = read_validated_number(input, output, &prompt, Some(&constraint))?;
            }
            Ok(Coefficients::Continued(coeffs))
        }
    }
}

/// Describe `fraction`, evaluate it at `x` and print the result
pub fn evaluate_once<W: WriteColor>(
    fraction: &Fraction<f64>,
    x: f64,
    output: &mut W,
) -> Result<f64, Error> {
    writeln!(output, "{}", fraction.describe())?;
    let value = fraction.evaluate(x)?;
    print_result(output, value)?;
    Ok(value)
}

/// Build and evaluate a fraction given on the command line, returning the exit code.
///
/// Domain errors are printed to `errors` and give exit code 1.
pub fn run_once<W: WriteColor, E: WriteColor>(
    coeffs: Coefficients,
    x: f64,
    output: &mut W,
    errors: &mut E,
) -> Result<i32, Error> {
    debug!(?coeffs, x, "one-shot evaluation");
    match coeffs.build().and_then(|f| evaluate_once(&f, x, output)) {
        Ok(_) => Ok(0),
        Err(e) if e.is_recoverable() => {
            warn!(error = %e, "one-shot evaluation failed");
            print_error(errors, &e)?;
            Ok(1)
        }
        Err(e) => Err(e),
    }
}
