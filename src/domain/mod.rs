//! Identifier mapping files.
//!
//! A mapping file is a JSON object from category name to an array of
//! identifier tests:
//!
//! ```json
//! {
//!   "registers": [
//!     {"label": "ga", "from_iri": "http://x/a", "from_headers": null, "to_iri": "http://x/b"}
//!   ]
//! }
//! ```
//!
//! Several files are merged into one `DomainMapping`; on a duplicate category
//! the later file replaces the whole entry.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error_handling::LoadError;

/// Request headers attached to an identifier test.
pub type RequestHeaders = BTreeMap<String, String>;

/// One identifier and the IRI it is expected to redirect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierTest {
    /// Human-readable name shown in reports
    pub label: String,
    /// The published identifier that is requested
    pub from_iri: String,
    /// Headers sent with the request (e.g. `Accept`)
    #[serde(default)]
    pub from_headers: Option<RequestHeaders>,
    /// Expected `Location` of the redirect
    pub to_iri: String,
}

/// Category name to identifier tests, merged from one or more files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainMapping(BTreeMap<String, Vec<IdentifierTest>>);

impl DomainMapping {
    /// Merges `other` into `self`. Categories present in both take `other`'s entry.
    pub fn merge(&mut self, other: DomainMapping) {
        self.0.extend(other.0);
    }

    /// Returns the tests registered under `category`.
    pub fn get(&self, category: &str) -> Option<&[IdentifierTest]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Iterates categories in name order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates every test with its category, in category order then file order.
    pub fn iter_tests(&self) -> impl Iterator<Item = (&str, &IdentifierTest)> {
        self.0
            .iter()
            .flat_map(|(category, tests)| tests.iter().map(move |t| (category.as_str(), t)))
    }

    /// Collects the `from_iri` of every test, for the bulk fetch modes.
    pub fn from_iris(&self) -> Vec<String> {
        self.iter_tests().map(|(_, t)| t.from_iri.clone()).collect()
    }

    /// Total number of tests across all categories.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// True when there are no tests at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<BTreeMap<String, Vec<IdentifierTest>>> for DomainMapping {
    fn from(map: BTreeMap<String, Vec<IdentifierTest>>) -> Self {
        Self(map)
    }
}

/// Splits the CLI's comma-separated file list.
///
/// Whitespace around each entry is trimmed and empty entries are dropped.
pub fn parse_file_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Loads a single mapping file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened and `LoadError::Parse`
/// if it is not a valid mapping.
pub fn load_domain(path: &Path) -> Result<DomainMapping, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping: DomainMapping =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "Loaded {} identifiers from {}",
        mapping.len(),
        path.display()
    );
    Ok(mapping)
}

/// Loads and merges mapping files in order (last write wins per category).
///
/// # Errors
///
/// Fails on the first file that cannot be loaded; nothing is returned for
/// the files that loaded before it.
pub fn load_domains<P: AsRef<Path>>(paths: &[P]) -> Result<DomainMapping, LoadError> {
    let mut merged = DomainMapping::default();
    for path in paths {
        merged.merge(load_domain(path.as_ref())?);
    }
    info!(
        "Loaded {} identifiers in {} categories from {} file{}",
        merged.len(),
        merged.categories().count(),
        paths.len(),
        if paths.len() == 1 { "" } else { "s" }
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
