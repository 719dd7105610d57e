//! Report rendering.
//!
//! Reports are written to any `std::io::Write` so the binary can target
//! stdout and tests can target a buffer.

use std::io::{self, Write};

use serde::Serialize;

use crate::classify::LdFailure;
use crate::config::{FailOn, OutputFormat};
use crate::validate::{RedirectOutcome, ValidationResult};

/// Results of a check run, one variant per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckReport {
    /// Redirect check results, one per identifier
    Mappings(Vec<ValidationResult>),
    /// `(url, status)` of plain GET failures
    Failures(Vec<(String, u16)>),
    /// `(url, status)` of RDF GET failures
    Rdf(Vec<(String, u16)>),
    /// URLs failing plain or RDF GET
    Ld(Vec<LdFailure>),
}

impl CheckReport {
    /// Number of failures in the report.
    pub fn failure_count(&self) -> usize {
        match self {
            CheckReport::Mappings(results) => results.iter().filter(|r| !r.success).count(),
            CheckReport::Failures(f) | CheckReport::Rdf(f) => f.len(),
            CheckReport::Ld(f) => f.len(),
        }
    }

    /// True if any failure was found.
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Process exit code for this report under `fail_on`.
    ///
    /// 0 when the policy is satisfied, 2 when failures trip it. (1 is left
    /// for fatal errors such as unreadable mapping files.)
    pub fn exit_code(&self, fail_on: FailOn) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::AnyFailure if self.has_failures() => 2,
            FailOn::AnyFailure => 0,
        }
    }
}

#[derive(Serialize)]
struct StatusFailure<'a> {
    url: &'a str,
    status: u16,
}

/// Writes a report in the requested format.
pub fn write_report<W: Write>(
    w: &mut W,
    report: &CheckReport,
    format: OutputFormat,
) -> io::Result<()> {
    match report {
        CheckReport::Mappings(results) => write_validation_report(w, results, format),
        CheckReport::Failures(failures) | CheckReport::Rdf(failures) => {
            write_failure_report(w, failures, format)
        }
        CheckReport::Ld(failures) => write_ld_report(w, failures, format),
    }
}

/// Writes redirect check results: the failures first, then every result.
pub fn write_validation_report<W: Write>(
    w: &mut W,
    results: &[ValidationResult],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(w, &results);
    }

    writeln!(w, "FAILURES")?;
    let mut no_failures = true;
    for result in results.iter().filter(|r| !r.success) {
        no_failures = false;
        let got = match &result.outcome {
            RedirectOutcome::NetworkError { cause, .. } => format!("<network error: {}>", cause),
            _ => result
                .actual_result
                .clone()
                .unwrap_or_else(|| "None".to_string()),
        };
        writeln!(
            w,
            "for \"{}\", to: {}, got: {}",
            result.label, result.expected_result, got
        )?;
    }
    if no_failures {
        writeln!(w, "none")?;
    }
    writeln!(w)?;
    writeln!(w, "ALL RESULTS")?;
    for result in results {
        writeln!(w, "{} {}", result.success, result.label)?;
    }
    Ok(())
}

/// Writes `(url, status)` failures, one per line.
pub fn write_failure_report<W: Write>(
    w: &mut W,
    failures: &[(String, u16)],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<_> = failures
            .iter()
            .map(|(url, status)| StatusFailure { url, status: *status })
            .collect();
        return write_json(w, &rows);
    }

    writeln!(w, "FAILURES")?;
    if failures.is_empty() {
        writeln!(w, "none")?;
    }
    for (url, status) in failures {
        writeln!(w, "{}\t{}", status, url)?;
    }
    Ok(())
}

/// Writes plain/RDF failures with both outcomes per URL.
pub fn write_ld_report<W: Write>(
    w: &mut W,
    failures: &[LdFailure],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(w, &failures);
    }

    writeln!(w, "FAILURES")?;
    if failures.is_empty() {
        writeln!(w, "none")?;
        return Ok(());
    }
    writeln!(w, "plain\trdf\turl")?;
    for failure in failures {
        writeln!(w, "{}\t{}\t{}", failure.plain, failure.rdf, failure.url)?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}
