//! # FancyTalk
//!
//! A datagram request/response service for styled text messages:
//! - Compact binary wire format with panic-free decoding
//! - Canned response table with a fallback entry
//! - Strictly sequential, single-socket UDP server
//! - Client that renders responses with ANSI colors
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      UDP Server                             │
//! │              (one datagram at a time)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw bytes
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Codec (decode / encode)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Package
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                              │
//! │         (response + Running / Terminating)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ MessageStore  │
//!               │  (read-only)  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod store;
pub mod dispatch;
pub mod network;
pub mod render;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FancyTalkError, Result};
pub use config::Config;
pub use dispatch::{Dispatcher, Resolution, ServerState};
pub use protocol::{MessageType, Package};
pub use store::{MatchRule, MessageStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FancyTalk
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
