//! Command line options

use crate::input::parse_number;
use crate::menu::Coefficients;
use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};

/// What the program was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Run the menu loop on stdin/stdout
    Interactive,
    /// Evaluate the fraction given by `coeffs` at `x` once
    Once { coeffs: Coefficients, x: f64 },
}

/// Options to run fraceval with.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    pub mode: Mode,
    /// Number of `-v` flags given
    pub verbosity: u64,
    /// When true, labels in the output will be colored.
    pub color: bool,
}

fn is_number(value: String) -> Result<(), String> {
    parse_number(&value)
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a finite number", value))
}

fn number_arg<'a, 'b>(name: &'a str, help: &'b str, index: u64) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .help(help)
        .required(true)
        .index(index)
        .validator(is_number)
}

fn number_of(matches: &ArgMatches<'_>, name: &str) -> Result<f64, clap::Error> {
    value_t!(matches, name, f64)
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(App<'a, '_>) -> Result<ArgMatches<'a>, clap::Error>,
{
    let app = App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about("Evaluates simple and continued fractions, interactively by default")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more details to stderr, repeat for more (RUST_LOG wins)"),
        )
        .subcommand(
            SubCommand::with_name("simple")
                .about("Evaluate f(x) = 1 / (a*x)")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(number_arg("a", "Coefficient, must not be zero", 1))
                .arg(number_arg("x", "Point to evaluate at", 2)),
        )
        .subcommand(
            SubCommand::with_name("continued")
                .about("Evaluate f(x) = 1 / (a1*x + 1 / (a2*x + 1 / (a3*x)))")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(number_arg("a1", "Outermost coefficient, must not be 3", 1))
                .arg(number_arg("a2", "Middle coefficient, must not be 3", 2))
                .arg(number_arg("a3", "Innermost coefficient, must not be 3", 3))
                .arg(number_arg("x", "Point to evaluate at", 4)),
        );
    let matches = parser(app)?;

    let mode = match matches.subcommand() {
        ("simple", Some(m)) => Mode::Once {
            coeffs: Coefficients::Simple(number_of(m, "a")?),
            x: number_of(m, "x")?,
        },
        ("continued", Some(m)) => Mode::Once {
            coeffs: Coefficients::Continued([
                number_of(m, "a1")?,
                number_of(m, "a2")?,
                number_of(m, "a3")?,
            ]),
            x: number_of(m, "x")?,
        },
        _ => Mode::Interactive,
    };

    Ok(Opts {
        mode,
        verbosity: matches.occurrences_of("verbose"),
        color,
    })
}
