//! UDP Server
//!
//! Receives query datagrams and answers them sequentially.

use std::net::{SocketAddr, UdpSocket};

use bytes::Bytes;

use crate::config::Config;
use crate::dispatch::{Dispatcher, ServerState};
use crate::error::{FancyTalkError, Result};
use crate::protocol::{decode_package, encode_package, encoded_len, MAX_DATAGRAM_SIZE};

/// Encoded answer to a single datagram
#[derive(Debug, Clone)]
pub struct Reply {
    /// Bytes to send back to the peer
    pub bytes: Bytes,

    /// State of the server once this reply is sent
    pub state: ServerState,
}

/// UDP server for FancyTalk
pub struct Server {
    socket: UdpSocket,

    dispatcher: Dispatcher,

    state: ServerState,

    /// Receive buffer, one byte over the limit so oversized datagrams are
    /// seen rather than truncated by the OS
    recv_buf: Vec<u8>,
}

impl Server {
    /// Bind a server to `config.listen_addr`
    ///
    /// The dispatcher's store is switched to `config.match_rule`.
    pub fn bind(config: &Config, dispatcher: Dispatcher) -> Result<Self> {
        let addr: SocketAddr = config.listen_addr.parse().map_err(|e| {
            FancyTalkError::Config(format!(
                "invalid listen address {:?}: {}",
                config.listen_addr, e
            ))
        })?;

        let socket = UdpSocket::bind(addr)?;
        tracing::info!("Listening on {}", socket.local_addr()?);

        Ok(Self {
            socket,
            dispatcher: dispatcher.with_match_rule(config.match_rule),
            state: ServerState::Running,
            recv_buf: vec![0u8; MAX_DATAGRAM_SIZE + 1],
        })
    }

    /// Address the socket is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run one request cycle over a received datagram
    ///
    /// Returns `None` when the datagram is dropped (decode failure, or an
    /// encode failure on the response). A reply that would exceed
    /// `MAX_DATAGRAM_SIZE` is sent without the echoed query.
    pub fn handle_datagram(&self, datagram: &[u8]) -> Option<Reply> {
        let query = match decode_package(datagram) {
            Ok(query) => query,
            Err(e) => {
                tracing::warn!("Dropping datagram of {} bytes: {}", datagram.len(), e);
                return None;
            }
        };

        tracing::trace!("Decoded query: {:?}", query);

        let mut resolution = self.dispatcher.resolve(query);
        let state = self.state.advance(&resolution);

        if encoded_len(&resolution.response) > MAX_DATAGRAM_SIZE {
            tracing::warn!(
                "Reply for id={} exceeds {} bytes, dropping echoed query",
                resolution.response.id,
                MAX_DATAGRAM_SIZE
            );
            resolution.response.query = None;
        }

        match encode_package(&resolution.response) {
            Ok(bytes) => Some(Reply { bytes, state }),
            Err(e) => {
                tracing::error!("Failed to encode response: {}", e);
                None
            }
        }
    }

    /// Receive one datagram and answer it
    ///
    /// Blocks until a datagram arrives. Send failures are logged and do not
    /// end the loop; receive failures are returned. Once terminating, returns
    /// immediately without receiving.
    pub fn serve_one(&mut self) -> Result<ServerState> {
        if self.state.is_terminating() {
            return Ok(self.state);
        }

        let (len, peer) = self.socket.recv_from(&mut self.recv_buf)?;
        tracing::debug!("Received {} bytes from {}", len, peer);

        let Some(reply) = self.handle_datagram(&self.recv_buf[..len]) else {
            return Ok(self.state);
        };

        if let Err(e) = self.socket.send_to(&reply.bytes, peer) {
            tracing::warn!("Error sending reply to {}: {}", peer, e);
        }

        self.state = reply.state;
        Ok(self.state)
    }

    /// Serve until a query hits the exit key (blocking)
    pub fn run(&mut self) -> Result<()> {
        while !self.state.is_terminating() {
            self.serve_one()?;
        }

        tracing::info!("Exit requested, stopping server");
        Ok(())
    }
}
