//! User-facing `Error:` and `Result:` lines

use std::fmt;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Number of digits printed after the decimal point of a result
pub const RESULT_PRECISION: usize = 4;

fn label<W: WriteColor>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

pub fn print_error<W: WriteColor>(out: &mut W, message: &dyn fmt::Display) -> io::Result<()> {
    label(out, "Error", Color::Red)?;
    writeln!(out, ": {}", message)
}

pub fn print_result<W: WriteColor, T: fmt::Display>(out: &mut W, value: T) -> io::Result<()> {
    label(out, "Result", Color::Green)?;
    writeln!(out, ": {:.*}", RESULT_PRECISION, value)
}
