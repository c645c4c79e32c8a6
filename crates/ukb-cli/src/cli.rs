//! CLI argument definitions for the UK Biobank schema tools.

use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;
use ukb_cli::logging::{LogConfig, LogFormat};
use ukb_model::FieldId;

#[derive(Parser)]
#[command(
    name = "ukb",
    version,
    about = "UK Biobank field lookup and schema download",
    long_about = "Look up UK Biobank fields and encodings in a local copy of the \
                  Showcase schema tables, or download a fresh copy of those tables.\n\n\
                  The schema directory defaults to ./schemas and can be set with \
                  --schema-dir or the UKB_SCHEMA_DIR environment variable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v also reports unresolved fields, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Directory holding the Showcase schema tables.
    #[arg(long = "schema-dir", value_name = "DIR", global = true)]
    pub schema_dir: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup for this invocation.
    ///
    /// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
    /// Colors follow `--color`; `auto` means a terminal and no log file.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && stderr_is_terminal,
        };
        LogConfig {
            use_env_filter: !self.verbosity.is_present() && self.log_level.is_none(),
            with_ansi,
            ..LogConfig::default()
        }
        .with_level_filter(level_filter)
        .with_format(self.log_format.into())
        .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up fields in the data field properties and encoding tables.
    Lookup(LookupArgs),

    /// List the permitted values of an encoding.
    Values(ValuesArgs),

    /// Download the schema tables from the Showcase.
    Fetch(FetchArgs),
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Field identifiers: FIELD, FIELD-INSTANCE or FIELD-INSTANCE.ARRAY.
    #[arg(value_name = "FIELD", required = true)]
    pub fields: Vec<FieldId>,

    /// Print a table with descriptions instead of `;`-separated text.
    #[arg(long = "print")]
    pub print: bool,
}

#[derive(Parser)]
pub struct ValuesArgs {
    /// Encoding identifier.
    #[arg(value_name = "ENCODING_ID")]
    pub encoding_id: u32,

    /// Print a table instead of one value per line.
    #[arg(long = "print")]
    pub print: bool,
}

#[derive(Parser)]
pub struct FetchArgs {
    /// Output directory (default: the schema directory).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (default: no timeout).
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ukb").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_defer_to_rust_log() {
        let config = parse(&["lookup", "4"]).log_config(true);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.is_verbose());
        assert!(config.with_ansi);
    }

    #[test]
    fn verbose_flag_enables_diagnostics() {
        let config = parse(&["--verbose", "lookup", "777", "5"]).log_config(false);
        assert!(config.is_verbose());
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn log_level_overrides_verbosity() {
        let config = parse(&["-vvv", "--log-level", "error", "lookup", "4"]).log_config(true);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn log_file_disables_auto_color() {
        let config = parse(&["--log-file", "ukb.log", "--log-format", "json", "values", "9"])
            .log_config(true);
        assert!(!config.with_ansi);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("ukb.log")));
    }
}
