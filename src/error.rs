use std::fmt;
use std::io;

/// The denominator that was found to be (nearly) zero during an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `a*x` of the simple fraction
    Simple,
    /// `a3*x`
    Inner,
    /// `a2*x + 1/(a3*x)`
    Middle,
    /// `a1*x + 1/(a2*x + 1/(a3*x))`
    Outer,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Simple => "simple",
            Stage::Inner => "inner",
            Stage::Middle => "middle",
            Stage::Outer => "outer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("please enter a valid number")]
    Parse,

    #[error("coefficient {name} = {value} is not allowed ({rule})")]
    InvalidCoefficient {
        name: &'static str,
        value: String,
        rule: &'static str,
    },

    #[error("division by zero in the {stage} denominator")]
    DivisionByZero { stage: Stage },

    #[error("input closed")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Errors that abort only the current step of the menu loop
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Parse | Error::InvalidCoefficient { .. } | Error::DivisionByZero { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_test() {
        let err = Error::DivisionByZero {
            stage: Stage::Middle,
        };
        assert_eq!(
            err.to_string(),
            "division by zero in the middle denominator"
        );

        let err = Error::InvalidCoefficient {
            name: "a2",
            value: "3".into(),
            rule: "must not be 3",
        };
        assert_eq!(
            err.to_string(),
            "coefficient a2 = 3 is not allowed (must not be 3)"
        );

        assert_eq!(Error::Parse.to_string(), "please enter a valid number");
    }

    #[test]
    fn recoverable_test() {
        let io_err = io::Error::new(io::ErrorKind::Other, "boom");
        let zero = Error::DivisionByZero {
            stage: Stage::Outer,
        };

        assert!(Error::Parse.is_recoverable());
        assert!(zero.is_recoverable());
        assert!(!Error::EndOfInput.is_recoverable());
        assert!(!Error::from(io_err).is_recoverable());
    }
}
