use std::{
    env, fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser as ClapParser;
use log::info;
use monkey_front::{
    lexer::lexer::Lexer,
    logging,
    parser::parser::Parser,
    repl::{self, Mode},
};

/// Scans and parses source for a small expression language. Starts a REPL
/// unless a file is given.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print tokens instead of the parsed program.
    #[arg(short, long)]
    tokens: bool,

    /// Increase log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Parse this file once instead of starting the REPL.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logging::init(logging::level_for_verbosity(args.verbose))
        .context("Failed to install logger")?;

    let mode = if args.tokens { Mode::Tokens } else { Mode::Ast };

    match args.file {
        Some(path) => run_file(&path, mode),
        None => {
            info!("starting REPL in {:?} mode", mode);
            let user = env::var("USER")
                .or_else(|_| env::var("USERNAME"))
                .unwrap_or_else(|_| String::from("there"));
            let mut stdout = io::stdout();
            repl::greet(&mut stdout, &user).context("REPL I/O failed")?;
            repl::start(io::stdin().lock(), &mut stdout, mode).context("REPL I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_file(path: &Path, mode: Mode) -> anyhow::Result<ExitCode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the input file '{}'", path.display()))?;

    if mode == Mode::Tokens {
        for token in Lexer::new(&source) {
            println!("{}", token);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();
    println!("{}", program.render());

    if parser.errors().is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    for error in parser.errors() {
        eprintln!("error[{}]: {}", error.get_error_name(), error);
    }
    eprintln!("-> {}", path.display());
    Ok(ExitCode::FAILURE)
}
