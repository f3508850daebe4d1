//! Message Store Module
//!
//! The fixed table of canned responses that queries are matched against.
//!
//! ## Responsibilities
//! - Hold `(key, package)` entries in insertion order
//! - Keep a fallback entry at index 0 that answers unmatched queries
//! - Match query bytes against keys using the configured `MatchRule`
//!
//! The store is built once at startup and only read while serving.

mod table;

pub use table::{MessageStore, EXIT_KEY, FALLBACK_KEY};

use bytes::Bytes;

use crate::protocol::Package;

/// How a query is compared against an entry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// The key starts with the query bytes.
    ///
    /// A short query can match a longer key that shares its prefix
    /// (`"greet"` matches `"greeting"`). Kept for wire compatibility with
    /// existing clients.
    #[default]
    Prefix,

    /// The key equals the query bytes.
    Exact,
}

impl MatchRule {
    /// Check whether `query` selects `key`
    pub fn matches(self, key: &[u8], query: &[u8]) -> bool {
        match self {
            MatchRule::Prefix => key.starts_with(query),
            MatchRule::Exact => key == query,
        }
    }
}

/// A keyed canned response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    key: Bytes,
    package: Package,
}

impl StoreEntry {
    pub fn new(key: impl Into<Bytes>, package: Package) -> Self {
        Self {
            key: key.into(),
            package,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn package(&self) -> &Package {
        &self.package
    }
}
