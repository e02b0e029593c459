//! Prompting for numbers until a usable one is typed

use crate::error::Error;
use crate::report::print_error;
use std::io::BufRead;
use termcolor::WriteColor;
use tracing::debug;

/// A condition the parsed number has to satisfy, with the message shown when it doesn't
pub struct Constraint<'a> {
    pub accepts: &'a dyn Fn(f64) -> bool,
    pub message: &'a str,
}

/// Write `prompt` and read one trimmed line.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so they
/// reach the caller as text that fails to parse.
pub fn read_line<R: BufRead, W: WriteColor>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, Error> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        // keep the terminal tidy when the input ends without a newline
        writeln!(output)?;
        return Err(Error::EndOfInput);
    }
    Ok(String::from_utf8_lossy(&bytes).trim().to_owned())
}

/// Parse a finite real number in decimal (or exponent) notation
pub fn parse_number(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::Parse),
    }
}

/// Prompt until the line parses and passes `constraint`, if any.
///
/// Only end of input or an I/O failure stops the retries.
pub fn read_validated_number<R: BufRead, W: WriteColor>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    constraint: Option<&Constraint<'_>>,
) -> Result<f64, Error> {
    loop {
        let line = read_line(input, output, prompt)?;
        match parse_number(&line) {
            Ok(v) => match constraint {
                Some(c) if !(c.accepts)(v) => {
                    debug!(value = v, "rejected by constraint");
                    print_error(output, &c.message)?;
                }
                _ => return Ok(v),
            },
            Err(e) => {
                debug!(input = %line, "not a number");
                print_error(output, &e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn run(input: &[u8], constraint: Option<&Constraint<'_>>) -> (Result<f64, Error>, String) {
        let mut input = input;
        let mut output = NoColor::new(Vec::new());
        let result = read_validated_number(&mut input, &mut output, "x = ", constraint);
        (result, String::from_utf8(output.into_inner()).unwrap())
    }

    #[test]
    fn parse_test() {
        assert_eq!(parse_number("2").unwrap(), 2.0);
        assert_eq!(parse_number("  -0.25 ").unwrap(), -0.25);
        assert_eq!(parse_number("1e-3").unwrap(), 0.001);
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("1,5").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn read_line_test() {
        let mut input: &[u8] = b"  12 \r\n\xff\xfe\nlast";
        let mut output = NoColor::new(Vec::new());
        assert_eq!(read_line(&mut input, &mut output, "> ").unwrap(), "12");
        assert_eq!(
            read_line(&mut input, &mut output, "> ").unwrap(),
            "\u{fffd}\u{fffd}"
        );
        assert_eq!(read_line(&mut input, &mut output, "> ").unwrap(), "last");

        let end = read_line(&mut input, &mut output, "> ");
        assert!(matches!(end, Err(Error::EndOfInput)));
    }

    #[test]
    fn retry_test() {
        let (result, output) = run(b"abc\n\n4.5\n", None);
        assert_eq!(result.unwrap(), 4.5);
        assert_eq!(output.matches("x = ").count(), 3);
        let errors = output.matches("Error: please enter a valid number").count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn invalid_utf8_test() {
        let (result, output) = run(b"\xff\xfe\n7\n", None);
        assert_eq!(result.unwrap(), 7.0);
        assert_eq!(output.matches("x = ").count(), 2);
        assert!(output.contains("Error: please enter a valid number"));
    }

    #[test]
    fn constraint_test() {
        let positive = |v: f64| v > 0.0;
        let constraint = Constraint {
            accepts: &positive,
            message: "x must be positive",
        };
        let (result, output) = run(b"-1\n0\n2\n", Some(&constraint));
        assert_eq!(result.unwrap(), 2.0);
        assert_eq!(output.matches("Error: x must be positive").count(), 2);
    }

    #[test]
    fn end_of_input_test() {
        let (result, _) = run(b"", None);
        assert!(matches!(result, Err(Error::EndOfInput)));

        let (result, output) = run(b"oops\n", None);
        assert!(matches!(result, Err(Error::EndOfInput)));
        assert!(output.contains("valid number"));
    }
}
