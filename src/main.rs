use fraceval::{get_opts, menu, Mode, Opts};
use std::io;
use termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn color_choice(stream: atty::Stream) -> ColorChoice {
    if atty::is(stream) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn main_impl() -> anyhow::Result<i32> {
    let color = atty::is(atty::Stream::Stdout);
    let Opts {
        mode,
        verbosity,
        color,
    } = get_opts(|app| Ok(app.get_matches()), color).unwrap_or_else(|e| e.exit());
    init_logging(verbosity);
    info!("fraceval v{} starting", env!("CARGO_PKG_VERSION"));

    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let code = match mode {
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            menu::run(&mut input, &mut stdout)?;
            0
        }
        Mode::Once { coeffs, x } => {
            let mut stderr = StandardStream::stderr(color_choice(atty::Stream::Stderr));
            menu::run_once(coeffs, x, &mut stdout, &mut stderr)?
        }
    };
    Ok(code)
}

fn main() {
    match std::panic::catch_unwind(main_impl) {
        Ok(Ok(code)) => std::process::exit(code),
        Ok(Err(e)) => {
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
        Err(..) => {
            eprint!("\nnote: fraceval hit an internal error\n");
            eprint!("\nnote: please report it with the input that caused it\n");
            std::process::exit(2);
        }
    }
}
