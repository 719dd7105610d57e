//! iri_check library: persistent identifier redirect and resolution checks
//!
//! This library loads registries of identifier mappings (IRI → expected
//! redirect target) and checks them against live HTTP endpoints, either
//! validating each redirect or reporting identifiers that fail to resolve
//! with plain or RDF content negotiation.
//!
//! # Example
//!
//! ```no_run
//! use iri_check::{run_check, Config, Mode};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     files: vec![PathBuf::from("registers.json")],
//!     mode: Mode::Mappings,
//!     ..Default::default()
//! };
//!
//! let report = run_check(&config).await?;
//! println!("{} failures", report.failure_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod report;
pub mod validate;

// Re-export public API
pub use classify::{http_failures, http_rdf_failures, ld_failures, LdFailure};
pub use config::{Config, FailOn, LogFormat, LogLevel, Mode, OutputFormat};
pub use domain::{load_domain, load_domains, DomainMapping, IdentifierTest};
pub use fetch::{fetch_many, FetchOutcome};
pub use report::{write_report, CheckReport};
pub use run::run_check;
pub use validate::{validate_redirect, RedirectOutcome, ValidationResult};

// Internal run module (mode dispatch)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::classify::{http_failures, http_rdf_failures, ld_failures};
    use crate::config::{Config, Mode};
    use crate::domain::load_domains;
    use crate::initialization::{init_client, init_redirect_client};
    use crate::report::CheckReport;
    use crate::validate::validate_all;

    /// Loads the configured mapping files and runs the configured check.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No input files are configured
    /// - A mapping file is missing or malformed
    /// - The HTTP client cannot be built
    ///
    /// Request failures are never errors here; they appear in the report.
    pub async fn run_check(config: &Config) -> Result<CheckReport> {
        if config.files.is_empty() {
            anyhow::bail!("No mapping files given");
        }
        let mapping = load_domains(config.files.as_slice())
            .context("Failed to load identifier mappings")?;
        info!("Running {:?} check", config.mode);

        let limit = config.max_concurrency;
        let report = match config.mode {
            Mode::Mappings => {
                let client =
                    init_redirect_client(config).context("Failed to initialize HTTP client")?;
                CheckReport::Mappings(validate_all(&client, &mapping).await)
            }
            Mode::Failures => {
                let client = init_client(config).context("Failed to initialize HTTP client")?;
                CheckReport::Failures(http_failures(&client, &mapping.from_iris(), limit).await)
            }
            Mode::Rdf => {
                let client = init_client(config).context("Failed to initialize HTTP client")?;
                CheckReport::Rdf(http_rdf_failures(&client, &mapping.from_iris(), limit).await)
            }
            Mode::Ld => {
                let client = init_client(config).context("Failed to initialize HTTP client")?;
                CheckReport::Ld(ld_failures(&client, &mapping.from_iris(), limit).await)
            }
        };

        info!("Check finished with {} failure(s)", report.failure_count());
        Ok(report)
    }
}
