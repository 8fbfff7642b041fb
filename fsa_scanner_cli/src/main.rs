//! # FSA Scanner CLI
//!
//! Prints one line per token until end of input.
//!
//! Usage: scanner [FILE] [--config prefs.toml] [-v...]

use clap::{ArgAction, Parser};
use fsa_scanner::config::{build_info, RuntimeConfig};
use fsa_scanner::logging::{self, codes};
use fsa_scanner::{lexical, log_info, ScanError, Scanner};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "scanner")]
#[command(version)]
#[command(about = "Table-driven token scanner - prints every token of the input", long_about = None)]
struct Args {
    /// Input file; standard input when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// TOML file with scanner and logging preferences
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_driver_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => match RuntimeConfig::load(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Fatal: {}", error);
                return ExitCode::FAILURE;
            }
        },
        None => RuntimeConfig::default(),
    };
    config.logging.min_log_level = config.logging.min_log_level.raised(args.verbose);

    if let Err(error) = logging::init_global_logging(&config.logging) {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &error);
    }

    if let Err(error) = lexical::validate_scanner_configuration() {
        logging::safe_log_error(codes::system::INTERNAL_ERROR, &error);
        eprintln!("Fatal: {}", error);
        return ExitCode::FAILURE;
    }

    log::debug!(
        "scanner {} ({} build), preferences: {:?}",
        build_info::version(),
        build_info::profile(),
        config.scanner
    );

    let input = args
        .file
        .as_ref()
        .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());
    log_info!("Scanner starting", "input" => input);

    let outcome = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => run(lexical::create_scanner_with_preferences(file, config.scanner)),
            Err(error) => {
                log::debug!("open {}: {}", path.display(), error);
                eprintln!("Fatal: Cannot open file");
                return ExitCode::FAILURE;
            }
        },
        None => run(lexical::create_scanner_with_preferences(
            io::stdin().lock(),
            config.scanner,
        )),
    };

    match outcome {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(error)) => {
            eprintln!("{}", failure_message(&error));
            ExitCode::FAILURE
        }
        Err(error) => {
            log::error!("cannot write token: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Maps `-v` occurrences onto the `log` facade used for driver diagnostics
fn init_driver_logging(verbose: u8) {
    let filter = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}

fn run<R: Read>(mut scanner: Scanner<R>) -> io::Result<Result<(), ScanError>> {
    let stdout = io::stdout();
    let outcome = print_tokens(&mut scanner, &mut stdout.lock())?;

    let metrics = scanner.metrics();
    log::info!(
        "{} tokens (t1={}, t2={}, t3={}), {} comments, {} lines",
        metrics.total_tokens,
        metrics.t1_tokens,
        metrics.t2_tokens,
        metrics.t3_tokens,
        metrics.comments_skipped,
        metrics.lines
    );

    Ok(outcome)
}

/// Writes one line per token through `EOFTk`. The outer error is an output
/// failure; the inner one is the scan failure that stopped the loop.
fn print_tokens<R: Read, W: Write>(
    scanner: &mut Scanner<R>,
    out: &mut W,
) -> io::Result<Result<(), ScanError>> {
    loop {
        match scanner.next_token() {
            Ok(token) => {
                writeln!(out, "{}", token)?;
                if token.is_eof() {
                    out.flush()?;
                    return Ok(Ok(()));
                }
            }
            Err(error) => {
                out.flush()?;
                return Ok(Err(error));
            }
        }
    }
}

fn failure_message(error: &ScanError) -> String {
    format!("SCANNER ERROR: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(text: &str) -> (String, Result<(), ScanError>) {
        let mut scanner = Scanner::from_text(text);
        let mut out = Vec::new();
        let outcome = print_tokens(&mut scanner, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["scanner", "input.txt", "--config", "prefs.toml", "-vv"]);
        assert_eq!(args.file, Some(PathBuf::from("input.txt")));
        assert_eq!(args.config, Some(PathBuf::from("prefs.toml")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_stdin_when_no_file() {
        let args = Args::parse_from(["scanner"]);
        assert!(args.file.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_prints_every_token_then_eof() {
        let (output, outcome) = printed("ab1 #22\n!note!\n$");
        assert!(outcome.is_ok());
        assert_eq!(output, "t2 token ab1 1\nt1 token #22 1\nt3 token $ 3\nEOFTk\n");
    }

    #[test]
    fn test_empty_input_prints_only_eof() {
        let (output, outcome) = printed("");
        assert!(outcome.is_ok());
        assert_eq!(output, "EOFTk\n");
    }

    #[test]
    fn test_stops_at_first_error() {
        let (output, outcome) = printed("ab1 @ $");
        assert_eq!(output, "t2 token ab1 1\n");

        let error = outcome.unwrap_err();
        assert!(matches!(
            error,
            ScanError::InvalidCharacter { character: '@', line: 1 }
        ));
        assert_eq!(
            failure_message(&error),
            "SCANNER ERROR: Invalid character '@' at line 1"
        );
    }
}
