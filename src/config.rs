//! Configuration for FancyTalk
//!
//! Centralized configuration with sensible defaults.

use crate::store::MatchRule;

/// Main configuration for a FancyTalk server or client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// UDP listen address of the server (host:port)
    pub listen_addr: String,

    /// Server address the client sends queries to (host:port)
    pub server_addr: String,

    /// How long the client waits for a reply (milliseconds, 0 = forever)
    pub client_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Lookup Configuration
    // -------------------------------------------------------------------------
    /// How queries are compared against message store keys
    pub match_rule: MatchRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:65432".to_string(),
            server_addr: "127.0.0.1:65432".to_string(),
            client_timeout_ms: 2000,
            match_rule: MatchRule::Prefix,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the UDP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the server address used by the client
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the client reply timeout (in milliseconds)
    pub fn client_timeout_ms(mut self, ms: u64) -> Self {
        self.config.client_timeout_ms = ms;
        self
    }

    /// Set the lookup match rule
    pub fn match_rule(mut self, rule: MatchRule) -> Self {
        self.config.match_rule = rule;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
