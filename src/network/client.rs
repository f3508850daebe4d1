//! UDP Client
//!
//! Sends a query package and waits for the matching response.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use bytes::Bytes;

use crate::error::{FancyTalkError, Result};
use crate::protocol::{decode_package, encode_package, MessageType, Package, MAX_DATAGRAM_SIZE};

/// Client side of the FancyTalk protocol
pub struct Client {
    socket: UdpSocket,

    server_addr: SocketAddr,

    /// Id stamped on the next query
    next_id: u16,
}

impl Client {
    /// Bind an ephemeral socket and connect it to `server_addr`
    ///
    /// `timeout` bounds each wait for a reply; `None` waits forever.
    pub fn connect(server_addr: impl ToSocketAddrs, timeout: Option<Duration>) -> Result<Self> {
        let server_addr = server_addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| FancyTalkError::Config("server address resolved to nothing".into()))?;

        let local = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(local)?;
        socket.connect(server_addr)?;
        socket.set_read_timeout(timeout.filter(|t| !t.is_zero()))?;

        Ok(Self {
            socket,
            server_addr,
            next_id: rand::random::<u16>(),
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send `text` as a query and return the server's response
    pub fn query(&mut self, text: impl Into<Bytes>) -> Result<Package> {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let query = Package::query(text).with_id(id);
        self.exchange(&query)
    }

    /// Send any package and return the decoded reply
    ///
    /// The reply must be a RESPONSE carrying the same id.
    pub fn exchange(&mut self, package: &Package) -> Result<Package> {
        let bytes = encode_package(package)?;
        let sent = self.socket.send(&bytes)?;
        tracing::debug!("Sent {} bytes to {}", sent, self.server_addr);

        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE + 1];
        let len = self.socket.recv(&mut buf)?;
        tracing::debug!("Got {} bytes", len);

        let response = decode_package(&buf[..len])?;

        if response.message_type != MessageType::Response {
            return Err(FancyTalkError::UnexpectedResponse(
                "server replied with a QUERY package".to_string(),
            ));
        }
        if response.id != package.id {
            return Err(FancyTalkError::UnexpectedResponse(format!(
                "id mismatch: sent {}, got {}",
                package.id, response.id
            )));
        }

        Ok(response)
    }
}
