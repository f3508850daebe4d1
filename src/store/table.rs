//! MessageStore implementation
//!
//! Vec-backed table scanned linearly; the table is tiny and order matters.

use bytes::Bytes;

use crate::protocol::Package;
use super::{MatchRule, StoreEntry};

/// Key of the fallback entry (always index 0)
pub const FALLBACK_KEY: &str = "fallback";

/// Key whose match asks the server to stop after replying
pub const EXIT_KEY: &str = "exit";

/// Ordered table of canned responses
#[derive(Debug, Clone)]
pub struct MessageStore {
    /// Entry 0 is the fallback; never empty
    entries: Vec<StoreEntry>,

    rule: MatchRule,
}

impl MessageStore {
    /// Create a store holding only the fallback entry
    pub fn new(fallback: Package) -> Self {
        Self {
            entries: vec![StoreEntry::new(FALLBACK_KEY, fallback)],
            rule: MatchRule::default(),
        }
    }

    /// Build the canned message table served by `fancytalk-server`
    pub fn build() -> Self {
        let fallback = Package::response()
            .with_bold(true)
            .with_blink(true)
            .with_rgb(0xff, 0x00, 0x00)
            .with_payload("Not found!");
        let greeting = Package::response()
            .with_italic(true)
            .with_rgb(0xee, 0x66, 0x22)
            .with_payload("Hello, world!");
        let hamlet = Package::response()
            .with_underlined(true)
            .with_rgb(0x00, 0x66, 0x66)
            .with_payload("Alas, poor Yorick!");
        let farewell = Package::response()
            .with_bold(true)
            .with_rgb(0x00, 0x22, 0x66)
            .with_payload("Time to sahay goooooodbyeeeeeee!!!!");
        let exit = Package::response()
            .with_bold(true)
            .with_rgb(0x00, 0x22, 0x66)
            .with_payload("Shutting down. Goodbye!");

        Self::new(fallback)
            .with_entry("greeting", greeting)
            .with_entry("hamlet", hamlet)
            .with_entry("farewell", farewell)
            .with_entry(EXIT_KEY, exit)
    }

    /// Append an entry; earlier entries win on lookup
    pub fn with_entry(mut self, key: impl Into<Bytes>, package: Package) -> Self {
        self.entries.push(StoreEntry::new(key, package));
        self
    }

    /// Set the rule used by `lookup`
    pub fn with_rule(mut self, rule: MatchRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    /// Find the entry answering `query`
    ///
    /// Entries are scanned in insertion order and the first match wins.
    /// An empty query, or one matching nothing, yields the fallback.
    pub fn lookup(&self, query: &[u8]) -> &StoreEntry {
        if query.is_empty() {
            return self.fallback();
        }

        self.entries
            .iter()
            .find(|entry| self.rule.matches(entry.key(), query))
            .unwrap_or_else(|| self.fallback())
    }

    pub fn fallback(&self) -> &StoreEntry {
        &self.entries[0]
    }

    /// Number of entries, fallback included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries, fallback included
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoreEntry> {
        self.entries.iter()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::build()
    }
}
