//! Datagram sources for the receive layer.
//!
//! The decoder consumes complete, already-assembled buffers; a
//! [`PacketSource`] is whatever hands it those buffers. The UDP source
//! is the production implementation; tests script their own.

use async_trait::async_trait;
use tokio::net::UdpSocket;

use crate::error::{PacketError, Result};

/// Upper bound on a single telemetry datagram. The largest 2022-format
/// packet (motion, 1464 bytes) fits with room for future growth.
pub const MAX_DATAGRAM: usize = 2048;

/// Default port the simulator broadcasts on.
pub const DEFAULT_PORT: u16 = 20777;

/// An async supplier of complete packet buffers.
///
/// Each call yields exactly one packet's bytes; fragmentation and
/// reassembly, if the transport needs them, happen behind this trait.
#[async_trait]
pub trait PacketSource: Send + 'static {
    /// Receive the next complete datagram.
    ///
    /// Returns:
    /// - `Ok(Some(bytes))` - one packet's bytes
    /// - `Ok(None)` - source exhausted (normal termination)
    /// - `Err(e)` - receive failure
    async fn next_datagram(&mut self) -> Result<Option<Vec<u8>>>;
}

/// UDP datagram source bound to a local address.
pub struct UdpSource {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl UdpSource {
    /// Bind a socket for incoming telemetry, e.g. `"0.0.0.0:20777"`.
    pub async fn bind(addr: impl tokio::net::ToSocketAddrs) -> Result<Self> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| PacketError::socket("binding telemetry socket", e))?;
        Ok(Self { socket, buf: vec![0u8; MAX_DATAGRAM] })
    }

    /// The locally bound address (useful when binding port 0 in tests).
    pub fn local_addr(&self) -> Result<std::net::SocketAddr> {
        self.socket.local_addr().map_err(|e| PacketError::socket("reading local address", e))
    }
}

#[async_trait]
impl PacketSource for UdpSource {
    async fn next_datagram(&mut self) -> Result<Option<Vec<u8>>> {
        let (len, _peer) = self
            .socket
            .recv_from(&mut self.buf)
            .await
            .map_err(|e| PacketError::socket("receiving datagram", e))?;
        Ok(Some(self.buf[..len].to_vec()))
    }
}
