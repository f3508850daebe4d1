//! Dispatch Module
//!
//! Turns a decoded query into the response to send back.
//!
//! ## Responsibilities
//! - Look the query key up in the `MessageStore`
//! - Stamp the response with the query's id and echo its query text
//! - Report whether the server should stop after replying
//!
//! Resolution is synchronous and never fails: the store always has a
//! fallback. Whether to keep serving is reported as a `ServerState` that the
//! caller owns; the dispatcher itself holds no mutable state.

use crate::protocol::{MessageType, Package};
use crate::store::{MatchRule, MessageStore, EXIT_KEY};

/// Lifecycle of the serving loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerState {
    /// Accepting requests
    #[default]
    Running,

    /// The exit key was hit; reply, then stop. Terminal.
    Terminating,
}

impl ServerState {
    pub fn is_terminating(self) -> bool {
        self == ServerState::Terminating
    }

    /// State after handling `resolution`
    pub fn advance(self, resolution: &Resolution) -> Self {
        match self {
            ServerState::Terminating => ServerState::Terminating,
            ServerState::Running => resolution.next_state(),
        }
    }
}

/// Outcome of resolving one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Package to send back, always `MessageType::Response`
    pub response: Package,

    /// True when the matched key is the exit sentinel
    pub terminate: bool,
}

impl Resolution {
    pub fn next_state(&self) -> ServerState {
        if self.terminate {
            ServerState::Terminating
        } else {
            ServerState::Running
        }
    }
}

/// Resolves query packages against a message store
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: MessageStore,
}

impl Dispatcher {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }

    /// Switch the store to `rule`
    pub fn with_match_rule(self, rule: MatchRule) -> Self {
        Self {
            store: self.store.with_rule(rule),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Resolve a query package into a response
    ///
    /// Takes the query by value: a decoded package lives for one request and
    /// its query bytes move into the response. `message_type` is not checked.
    pub fn resolve(&self, query: Package) -> Resolution {
        let entry = self.store.lookup(query.query_bytes());
        let terminate = entry.key() == EXIT_KEY.as_bytes();

        let mut response = entry.package().clone();
        response.message_type = MessageType::Response;
        response.id = query.id;
        response.query = query.query;

        tracing::trace!(
            "Resolved query id={} to key {:?} (terminate={})",
            response.id,
            String::from_utf8_lossy(entry.key()),
            terminate
        );

        Resolution { response, terminate }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(MessageStore::build())
    }
}
