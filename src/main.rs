use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use jsfront::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    printer::printer::print_program,
};
use tracing::info;

mod logging;

#[derive(Parser)]
#[command(name = "jsfront")]
#[command(about = "Tokenize and parse a small JavaScript subset")]
#[command(version)]
struct Cli {
    /// Source file to read
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    path: Option<PathBuf>,

    /// Parse the given source text instead of a file
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Print the token list
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree (the default when nothing else is selected)
    #[arg(long)]
    ast: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (source, file) = match (&cli.eval, &cli.path) {
        (Some(source), _) => (source.clone(), None),
        (None, Some(path)) => match read_to_string(path) {
            Ok(source) => (source, Some(path.display().to_string())),
            Err(err) => {
                eprintln!("Error: failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        (None, None) => unreachable!("clap requires a path or --eval"),
    };

    match run(&cli, &source, file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, source: &str, file: Option<String>) -> Result<(), Error> {
    let start = Instant::now();
    let tokens = tokenize(source, file)?;
    info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("- {}", token);
        }
    }

    let parse_start = Instant::now();
    let program = parse(tokens)?;
    info!("Parsed in {:?}", parse_start.elapsed());

    if cli.ast || !cli.tokens {
        println!("{}", print_program(&program));
    }

    Ok(())
}

fn display_error(error: &Error) {
    eprintln!("{}", error);

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("        tip: {}", tip);
    }
}
