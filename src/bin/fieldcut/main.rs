//! Fieldcut CLI: print one delimiter-separated field of every line of a file.

use anyhow::{Context, Result};
use clap::Parser;
use fieldcut::{write_fields, Buffer, Config, FieldSpec};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

/// Extract a single field from every line of a delimited text file
#[derive(Debug, Parser)]
#[command(name = "fieldcut")]
#[command(version)]
struct Cli {
    /// Input file
    file: PathBuf,

    /// Field delimiter, a single character (`\t` for tab)
    #[arg(short = 'd', value_name = "CHAR", default_value = "\\t", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Field to extract, counting from 1
    #[arg(short = 'f', value_name = "N", default_value = "2", allow_negative_numbers = true, value_parser = parse_field)]
    field: usize,

    /// Print the resolved configuration before the output
    #[arg(short = 'l')]
    log: bool,
}

/// Exit codes for the fieldcut command.
mod exit_codes {
    /// Every line was processed.
    pub const SUCCESS: i32 = 0;
    /// Usage, configuration, or I/O error.
    pub const FAILURE: i32 = 1;
}

/// Parse a delimiter argument: one ASCII character, or `\t` / `\\`.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" => return Ok(b'\t'),
        "\\\\" => return Ok(b'\\'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(c), None) => Err(format!(
            "delimiter must be a single-byte character, got '{}'",
            c
        )),
        (None, _) => Err("delimiter cannot be empty".to_string()),
        _ => Err(format!("delimiter must be a single character, got '{}'", s)),
    }
}

/// Parse a 1-based field index.
fn parse_field(s: &str) -> Result<usize, String> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid field number: '{}'", s))?;
    if n < 1 {
        return Err("field must be higher than 0".to_string());
    }
    usize::try_from(n).map_err(|_| format!("field number too large: '{}'", s))
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not errors
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(exit_codes::FAILURE);
        }
    };

    init_logging(cli.log);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(exit_codes::FAILURE);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Resolve configuration, load the file, and write the selected field of every line.
fn run(cli: Cli) -> Result<i32> {
    let spec = FieldSpec::new(cli.delimiter, cli.field)?;
    let config = Config::new(cli.file, spec, cli.log)?;
    log::debug!("resolved configuration: {:?}", config);

    let buffer = Buffer::load(config.path())?;
    log::debug!(
        "loaded {} bytes from {}",
        buffer.len(),
        config.path().display()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let written = if config.verbose() {
        write!(out, "{}", config.report(buffer.len()))
            .and_then(|()| write_fields(&buffer, config.spec(), &mut out))
    } else {
        write_fields(&buffer, config.spec(), &mut out)
    };

    match written {
        Ok(stats) => {
            log::debug!(
                "scanned {} records, {} without field {}",
                stats.records,
                stats.missing,
                config.spec().field()
            );
            Ok(exit_codes::SUCCESS)
        }
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(exit_codes::SUCCESS),
        Err(e) => Err(e).context("failed to write to stdout"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\\\").unwrap(), b'\\');
        assert_eq!(parse_delimiter("|").unwrap(), b'|');

        // Errors
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("1").unwrap(), 1);
        assert_eq!(parse_field("2").unwrap(), 2);
        assert_eq!(parse_field(" 12 ").unwrap(), 12);

        // Errors
        assert_eq!(parse_field("0").unwrap_err(), "field must be higher than 0");
        assert!(parse_field("-3").is_err());
        assert!(parse_field("abc").is_err());
        assert!(parse_field("").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["fieldcut", "data.tsv"]).unwrap();
        assert_eq!(cli.delimiter, b'\t');
        assert_eq!(cli.field, 2);
        assert!(!cli.log);
        assert_eq!(cli.file, PathBuf::from("data.tsv"));
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["fieldcut", "-d", ",", "-f", "3", "-l", "data.csv"]).unwrap();
        assert_eq!(cli.delimiter, b',');
        assert_eq!(cli.field, 3);
        assert!(cli.log);
    }

    #[test]
    fn test_cli_rejects_zero_field() {
        assert!(Cli::try_parse_from(["fieldcut", "-f", "0", "data.tsv"]).is_err());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["fieldcut"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
