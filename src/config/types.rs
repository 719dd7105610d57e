//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::domain::parse_file_list;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which check to run over the loaded identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Check each `from_iri` redirects to its `to_iri` (sequential)
    #[default]
    Mappings,
    /// Report `from_iri`s whose plain GET ends in an error status
    Failures,
    /// Report `from_iri`s whose `Accept: text/turtle` GET ends in an error status
    Rdf,
    /// Report `from_iri`s failing either the plain or the RDF GET
    Ld,
}

/// Report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text tables
    #[default]
    Plain,
    /// A single JSON document
    Json,
}

/// When the process should exit with a non-zero code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the report is written
    #[default]
    Never,
    /// Exit 2 if the report contains at least one failure
    AnyFailure,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `clap`.
///
/// # Examples
///
/// ```no_run
/// use iri_check::{Config, Mode};
/// use std::path::PathBuf;
///
/// let config = Config {
///     files: vec![PathBuf::from("registers.json")],
///     mode: Mode::Ld,
///     max_concurrency: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Mapping files to load, merged in order (later files win)
    pub files: Vec<PathBuf>,

    /// Check to run
    pub mode: Mode,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report format
    pub output_format: OutputFormat,

    /// Maximum in-flight requests for bulk fetches (0 = unbounded)
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            mode: Mode::Mappings,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fail_on: FailOn::Never,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Check redirects for two registries
/// iri_check registers.json,vocabs.json
///
/// # Report identifiers that fail plain or RDF negotiation, 20 at a time
/// iri_check registers.json --mode ld --max-concurrency 20
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "iri_check",
    about = "Checks that identifier IRIs redirect to their registered targets."
)]
pub struct Opt {
    /// Comma-separated list of mapping files
    pub files: String,

    /// Check to run: mappings|failures|rdf|ld
    #[arg(long, value_enum, default_value_t = Mode::Mappings)]
    pub mode: Mode,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,

    /// Maximum concurrent requests for bulk modes (0 = unbounded)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Exit policy: never|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            files: parse_file_list(&opt.files),
            mode: opt.mode,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output_format: opt.output_format,
            max_concurrency: opt.max_concurrency,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            fail_on: opt.fail_on,
        }
    }
}
