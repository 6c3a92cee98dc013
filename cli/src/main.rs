//! A tool to format proof-of-work difficulty values.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(unused_mut)]
#![warn(clippy::missing_docs_in_private_items)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::if_not_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod logger;

use crate::config::*;
use crate::logger::*;
use clap::{Parser, Subcommand};
use difficulty_format::*;
use serde_json::Value;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use std::process::exit;

/// A tool to format proof-of-work difficulty values.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// Difficulty subcommands.
    #[command(subcommand)]
    command: Commands,
}

/// Difficulty subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Formats difficulty values with magnitude suffixes.
    Format {
        /// Difficulty values to format. Values that are not numbers are
        /// formatted as "Invalid". If none are provided, values are read from
        /// standard input, one per line.
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Read values from standard input, one per line, after any values
        /// provided as arguments.
        #[arg(short, long, value_parser, default_value_t = false)]
        stdin: bool,
        /// Read a single JSON document from standard input. An array is
        /// formatted element by element. Any other document is formatted as
        /// one value.
        #[arg(short, long, value_parser, default_value_t = false, conflicts_with_all = ["values", "stdin"])]
        json: bool,
        /// Print each input alongside its formatted value.
        #[arg(short = 'i', long, value_parser, default_value_t = false)]
        show_input: bool,
        /// Path to the configuration file.
        #[arg(short, long, value_parser)]
        config: Option<PathBuf>,
        /// Debug mode.
        #[arg(short, long, value_parser, default_value_t = false)]
        debug: bool,
    },
    /// Parses formatted difficulty strings, such as "1.5K", back into numbers.
    Parse {
        /// Formatted difficulty strings to parse.
        #[arg(required = true, allow_negative_numbers = true)]
        strings: Vec<String>,
        /// Path to the configuration file.
        #[arg(short, long, value_parser)]
        config: Option<PathBuf>,
        /// Debug mode.
        #[arg(short, long, value_parser, default_value_t = false)]
        debug: bool,
    },
    /// Writes a configuration file with the default settings.
    InitConfig {
        /// Path to the configuration file. Defaults to a file next to the
        /// executable.
        #[arg(short, long, value_parser)]
        config: Option<PathBuf>,
        /// Overwrite the configuration file if it already exists.
        #[arg(short, long, value_parser, default_value_t = false)]
        force: bool,
    },
}

/// A formatted difficulty alongside the input it was formatted from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Formatted {
    /// The input as it was provided.
    input: String,
    /// The formatted difficulty.
    output: String,
}

/// Formats a difficulty provided as plain text. Text that is not a number is
/// formatted as the invalid sentinel.
fn format_text(text: &str) -> Formatted {
    let output = match text.trim().parse::<f64>() {
        Ok(difficulty) => format_difficulty(difficulty),
        Err(e) => {
            log::debug!("treating {text:?} as non-numeric: {e}");
            INVALID.to_owned()
        }
    };

    Formatted {
        input: text.to_owned(),
        output,
    }
}

/// Formats each non-empty line read from the reader.
fn format_lines<R: BufRead>(reader: R) -> io::Result<Vec<Formatted>> {
    let mut formatted = Vec::new();

    for line in reader.lines() {
        let line = line?;

        if !line.trim().is_empty() {
            formatted.push(format_text(&line));
        }
    }

    Ok(formatted)
}

/// Formats the JSON document read from the reader.
fn format_json<R: Read>(reader: R) -> serde_json::Result<Vec<Formatted>> {
    let document = serde_json::from_reader::<_, Value>(reader)?;
    let values = match document {
        Value::Array(values) => values,
        value => vec![value],
    };

    Ok(values
        .iter()
        .map(|value| Formatted {
            input: value.to_string(),
            output: format_value(value),
        })
        .collect())
}

/// Renders formatted difficulties, one per line.
fn render(formatted: &[Formatted], show_input: bool) -> String {
    formatted
        .iter()
        .map(|item| {
            if show_input {
                format!("{} => {}", item.input.trim(), item.output)
            } else {
                item.output.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses each formatted difficulty string, collecting every failure.
fn parse_all(strings: &[String]) -> Result<String, String> {
    let mut parsed = Vec::new();
    let mut failures = Vec::new();

    for s in strings {
        match parse_difficulty(s) {
            Ok(difficulty) => parsed.push(difficulty.to_string()),
            Err(e) => failures.push(format!("Failed to parse difficulty {s:?}: {e}")),
        }
    }

    if failures.is_empty() {
        Ok(parsed.join("\n"))
    } else {
        Err(failures.join("\n"))
    }
}

/// Resolves the configuration file path, defaulting to a file next to the
/// executable.
fn resolve_config_path(config_path: Option<PathBuf>) -> Result<PathBuf, String> {
    match config_path {
        Some(path) => Ok(path),
        None => default_config_path()
            .map_err(|e| format!("Failed to locate configuration file: {e}")),
    }
}

/// Resolves the configuration file path and loads the configuration from it.
fn load_config(config_path: Option<PathBuf>) -> Result<Config, String> {
    let path = resolve_config_path(config_path)?;

    Config::load(&path)
        .map_err(|e| format!("Failed to load configuration from {}: {e}", path.display()))
}

/// Loads the configuration, applies the flags, and initializes logging.
fn setup(config_path: Option<PathBuf>, debug: bool, show_input: bool) -> Result<Config, String> {
    let config = load_config(config_path)?.with_flags(debug, show_input);
    init_logger(config.debug).map_err(|e| format!("Failed to initialize logging: {e}"))?;
    log::debug!("loaded configuration: {config:?}");
    Ok(config)
}

/// Attempt to perform a difficulty operation.
fn perform(command: Commands) -> Result<String, String> {
    match command {
        Commands::Format {
            values,
            stdin,
            json,
            show_input,
            config,
            debug,
        } => {
            let config = setup(config, debug, show_input)?;

            let formatted = if json {
                format_json(io::stdin().lock())
                    .map_err(|e| format!("Failed to read JSON from standard input: {e}"))?
            } else {
                let mut formatted = values
                    .iter()
                    .map(String::as_str)
                    .map(format_text)
                    .collect::<Vec<_>>();

                if stdin || values.is_empty() {
                    formatted.extend(
                        format_lines(io::stdin().lock())
                            .map_err(|e| format!("Failed to read standard input: {e}"))?,
                    );
                }

                formatted
            };

            log::debug!("formatted {} difficulty values", formatted.len());
            Ok(render(&formatted, config.show_input))
        }
        Commands::Parse {
            strings,
            config,
            debug,
        } => {
            setup(config, debug, false)?;
            parse_all(&strings)
        }
        Commands::InitConfig { config, force } => {
            let path = resolve_config_path(config)?;

            if path.exists() && !force {
                return Err(format!(
                    "Configuration file already exists: {}",
                    path.display()
                ));
            }

            Config::default()
                .save(&path)
                .map_err(|e| format!("Failed to write configuration: {e}"))?;
            Ok(format!("Wrote default configuration to {}", path.display()))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match perform(cli.command) {
        Ok(msg) => {
            if !msg.is_empty() {
                println!("{msg}");
            }
        }
        Err(msg) => {
            eprintln!("{msg}");
            exit(1);
        }
    }
}

/// Command line tests.
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_values_are_not_flags() {
        let cli = Cli::try_parse_from(["difficulty-format", "format", "-5", "1500"]).unwrap();

        match cli.command {
            Commands::Format { values, .. } => assert_eq!(values, ["-5", "1500"]),
            command => panic!("unexpected command: {command:?}"),
        }

        assert!(Cli::try_parse_from(["difficulty-format", "format", "--json", "1500"]).is_err());
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_text("1500").output, "1.5K");
        assert_eq!(format_text(" 2000000 ").output, "2M");
        assert_eq!(format_text("999").output, "999");
        assert_eq!(format_text("NaN").output, INVALID);
        assert_eq!(format_text("not a number").output, INVALID);
        assert_eq!(format_text("1.5K").output, INVALID);
        assert_eq!(format_text("1500").input, "1500");
    }

    #[test]
    fn test_format_lines() {
        let input = "1000\n\n  \n1e15\nabc\n";
        let formatted = format_lines(input.as_bytes()).unwrap();
        let outputs = formatted
            .iter()
            .map(|item| item.output.as_str())
            .collect::<Vec<_>>();
        assert_eq!(outputs, ["1K", "1P", INVALID]);
    }

    #[test]
    fn test_format_json() {
        let formatted = format_json(r#"[1500, "1500", null, 2e6]"#.as_bytes()).unwrap();
        let outputs = formatted
            .iter()
            .map(|item| item.output.as_str())
            .collect::<Vec<_>>();
        assert_eq!(outputs, ["1.5K", INVALID, INVALID, "2M"]);
        assert_eq!(formatted[1].input, r#""1500""#);

        let formatted = format_json("123456789".as_bytes()).unwrap();
        assert_eq!(formatted.len(), 1);
        assert_eq!(formatted[0].output, "123.46M");

        assert!(format_json("[1500".as_bytes()).is_err());
    }

    #[test]
    fn test_render() {
        let formatted = vec![format_text("1500"), format_text("x")];
        assert_eq!(render(&formatted, false), "1.5K\nInvalid");
        assert_eq!(render(&formatted, true), "1500 => 1.5K\nx => Invalid");
        assert_eq!(render(&[], true), "");
    }

    #[test]
    fn test_parse_all() {
        let strings = vec!["1.5K".to_owned(), "2M".to_owned(), "999".to_owned()];
        assert_eq!(parse_all(&strings), Ok("1500\n2000000\n999".to_owned()));

        let strings = vec!["1K".to_owned(), "Invalid".to_owned(), "x".to_owned()];
        let err = parse_all(&strings).unwrap_err();
        assert_eq!(err.lines().count(), 2);
        assert!(err.contains("\"Invalid\""));
        assert!(err.contains("\"x\""));
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(load_config(Some(path.clone())), Ok(Config::default()));

        std::fs::write(&path, r#"{ "debug": true }"#).unwrap();
        assert!(load_config(Some(path)).unwrap().debug);
    }

    #[test]
    fn test_init_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let init = |force| {
            perform(Commands::InitConfig {
                config: Some(path.clone()),
                force,
            })
        };

        assert!(init(false).is_ok());
        assert!(path.exists());
        assert!(init(false).is_err());
        assert!(init(true).is_ok());
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
