use std::{
    fs,
    io::{self, Write},
};

use blockscript::{SAMPLE_PROGRAM, interpreter::executor::core::Program, run};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// blockscript runs programs written in a small line-oriented,
/// block-structured scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells blockscript to read the program from a file instead of taking
    /// it inline.
    #[arg(short, long)]
    file: bool,

    /// Runs the built-in FizzBuzz and countdown program.
    #[arg(short, long, conflicts_with = "contents")]
    sample: bool,

    /// Prints the block map of the program instead of running it.
    #[arg(short, long)]
    blocks: bool,

    /// Raises the log level on stderr; repeat for more detail. `RUST_LOG`
    /// takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The program, or its path with `--file`.
    #[arg(required_unless_present = "sample")]
    contents: Option<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = match (args.sample, args.contents) {
        (true, _) | (false, None) => SAMPLE_PROGRAM.to_string(),
        (false, Some(path)) if args.file => fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        }),
        (false, Some(contents)) => contents,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.blocks {
        print_blocks(&script, &mut out)
    } else {
        run(&script, &mut out).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Writes one `from -> to` line per jump, using 1-based line numbers.
fn print_blocks(script: &str, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::parse(script)?;

    for (from, to) in program.blocks().entries() {
        writeln!(out, "{:>4} -> {}", from + 1, to + 1)?;
    }

    Ok(())
}
