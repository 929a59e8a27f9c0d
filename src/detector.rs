// WHY: duplicate detection over a finalized document's top-level sections
// Reports duplicates instead of letting the assembled output silently repeat a section

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::document::Document;
use crate::header_key::normalize_header_key_with;

/// Raised when two or more top-level headers share a canonical key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DuplicateHeadersError {
    duplicates: Vec<String>,
    message: String,
}

impl DuplicateHeadersError {
    /// Build the error from representative names, sorting them for a stable report
    pub fn new(mut duplicates: Vec<String>) -> Self {
        duplicates.sort();
        let quoted: Vec<String> = duplicates.iter().map(|name| format!("'{name}'")).collect();
        let message = format!(
            "Error: The following headers appear multiple times: {}",
            quoted.join(", ")
        );
        Self { duplicates, message }
    }

    /// Sorted representative header names
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A header as found in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Position of the node among the document's direct children
    pub index: usize,
    pub text: &'a str,
}

/// Headers grouped by canonical key, each group in document order
#[derive(Debug, Clone, Default)]
pub struct HeaderGroups<'a> {
    groups: BTreeMap<String, Vec<Header<'a>>>,
    header_count: usize,
}

impl<'a> HeaderGroups<'a> {
    /// Group the document's top-level headers under the given strictness
    pub fn build(document: &'a Document, strict: bool) -> Self {
        let mut groups: BTreeMap<String, Vec<Header<'a>>> = BTreeMap::new();
        let mut header_count = 0;
        let mut scratch = String::new();

        for (index, text) in document.top_level_headers() {
            header_count += 1;
            groups
                .entry(normalize_header_key_with(text, strict, &mut scratch))
                .or_default()
                .push(Header { index, text });
        }

        Self { groups, header_count }
    }

    /// Number of top-level headers seen
    pub fn header_count(&self) -> usize {
        self.header_count
    }

    /// Number of distinct canonical keys
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Headers grouped under `key`, in document order, or `None` for an unseen key
    pub fn group_for(&self, key: &str) -> Option<&[Header<'a>]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Groups with more than one member, ordered by canonical key
    pub fn duplicate_groups(&self) -> impl Iterator<Item = &[Header<'a>]> + '_ {
        self.groups
            .values()
            .filter(|headers| headers.len() > 1)
            .map(Vec::as_slice)
    }

    /// First-encountered header text of every duplicate group, sorted
    pub fn representatives(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .duplicate_groups()
            .map(|headers| headers[0].text.to_string())
            .collect();
        names.sort();
        names
    }
}

/// Checks a document for duplicate top-level section headers
///
/// The check must observe the document only after every step that can add or
/// rename top-level sections has run; [`crate::weaver::Weaver`] schedules it that way.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    config: CheckConfig,
}

impl DuplicateDetector {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Fail with [`DuplicateHeadersError`] if any canonical key is shared
    pub fn check(&self, document: &Document) -> Result<(), DuplicateHeadersError> {
        let groups = HeaderGroups::build(document, self.config.strict);
        let duplicates = groups.representatives();

        if duplicates.is_empty() {
            info!(
                headers = groups.header_count(),
                strict = self.config.strict,
                "No duplicate top-level headers"
            );
            return Ok(());
        }

        // Advisory trace of which nodes matched each duplicate
        for headers in groups.duplicate_groups() {
            let matched: Vec<String> = headers
                .iter()
                .map(|header| format!("#{} {:?}", header.index, header.text))
                .collect();
            debug!(
                duplicate = headers[0].text,
                matches = %matched.join(", "),
                "Duplicate top-level header"
            );
        }

        Err(DuplicateHeadersError::new(duplicates))
    }
}

/// Check a document with the given strictness
pub fn check(document: &Document, strict: bool) -> Result<(), DuplicateHeadersError> {
    DuplicateDetector::new(CheckConfig { strict }).check(document)
}
