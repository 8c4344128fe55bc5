use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use clap::Parser;
use romanus::{
    evaluate,
    session::{Session, SessionEnd},
    util::strip_whitespace,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// romanus evaluates binary expressions written in Arabic or Roman numerals,
/// such as `3 + 4` or `X / II`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from this file instead of standard input.
    #[arg(short, long)]
    file: Option<String>,

    /// Suppresses the banner and prompts.
    #[arg(short, long)]
    quiet: bool,

    /// Enables debug logging on standard error.
    #[arg(short, long)]
    verbose: bool,

    /// Evaluates a single expression and exits.
    #[arg(conflicts_with = "file")]
    expression: Option<String>,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "romanus=debug" } else { "romanus=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(filter)
                                  .with(tracing_subscriber::fmt::layer().with_target(false)
                                                                        .with_writer(io::stderr)
                                                                        .compact())
                                  .init();
}

fn run(args: &Args) -> Result<SessionEnd, Box<dyn std::error::Error>> {
    if let Some(expression) = &args.expression {
        let answer = evaluate(&strip_whitespace(expression))?;
        println!("{answer}");
        return Ok(SessionEnd::Exhausted);
    }

    let session = Session { quiet: args.quiet || args.file.is_some() };
    let mut stdout = io::stdout().lock();

    let end = if let Some(path) = &args.file {
        let file = File::open(path).map_err(|e| format!("Failed to read the input file '{path}': {e}"))?;
        session.run(BufReader::new(file), &mut stdout)?
    } else {
        session.run(io::stdin().lock(), &mut stdout)?
    };

    Ok(end)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(SessionEnd::Exhausted) => ExitCode::SUCCESS,
        Ok(SessionEnd::Terminated(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
