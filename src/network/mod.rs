//! Network Module
//!
//! UDP server and client.
//!
//! ## Architecture
//! - One blocking UDP socket, one datagram handled at a time
//! - Each datagram is decoded, resolved by the `Dispatcher` and answered
//! - Undecodable datagrams are dropped without a reply

mod server;
mod client;

pub use server::{Reply, Server};
pub use client::Client;
