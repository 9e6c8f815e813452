//! Proposal status taxonomy
//!
//! Maps the status letter of a proposal abbreviation (the `F` in `SF`) to the
//! statuses a detail page is allowed to declare. Rows without a status letter
//! use the entry stored under the empty key.

use std::collections::BTreeMap;

/// Key of the entry used when an abbreviation has no status letter
pub const DEFAULT_KEY: &str = "";

/// Built-in status table for the PEP index
pub fn builtin_entries() -> BTreeMap<String, Vec<String>> {
    [
        ("A", &["Active", "Accepted"][..]),
        ("D", &["Deferred"][..]),
        ("F", &["Final"][..]),
        ("P", &["Provisional"][..]),
        ("R", &["Rejected"][..]),
        ("S", &["Superseded"][..]),
        ("W", &["Withdrawn"][..]),
        (DEFAULT_KEY, &["Draft", "Active"][..]),
    ]
    .into_iter()
    .map(|(code, statuses)| {
        (
            code.to_string(),
            statuses.iter().map(|s| s.to_string()).collect(),
        )
    })
    .collect()
}

/// Immutable status-code -> accepted-statuses mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTaxonomy {
    entries: BTreeMap<String, Vec<String>>,
}

impl StatusTaxonomy {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    /// Accepted statuses for a status letter, or the default entry for `None`
    ///
    /// An unknown letter yields an empty set, so every declared status for
    /// it is reported as a mismatch.
    pub fn expected(&self, status_letter: Option<char>) -> &[String] {
        let found = match status_letter {
            Some(letter) => {
                let mut buf = [0u8; 4];
                self.entries.get(letter.encode_utf8(&mut buf) as &str)
            }
            None => self.entries.get(DEFAULT_KEY),
        };
        found.map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for StatusTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
