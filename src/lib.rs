//! Schema-driven decoder for F1-style UDP telemetry packets.
//!
//! Gridwire turns the raw datagrams a racing simulator broadcasts into
//! strongly-typed packet values. Packet layouts are described once as
//! static schema tables; a single recursive decoder walks a byte cursor
//! across each buffer in lock-step with the schema.
//!
//! # Features
//!
//! - **Complete 2022-format catalogue**: all twelve packet kinds,
//!   including the event packet's discriminated-union payload
//! - **Exact wire fidelity**: little-endian fixed-width fields, no
//!   padding, schema-fixed array lengths (per-car arrays are always
//!   [`GRID_SIZE`] long regardless of any "active cars" count)
//! - **Typed failures**: truncation, unknown packet ids, and unknown
//!   event codes are distinguishable values, never panics
//! - **Async receive layer**: a UDP listener that decodes in a task and
//!   hands packets out as an async stream
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use gridwire::{Gridwire, PacketBody};
//!
//! #[tokio::main]
//! async fn main() -> gridwire::Result<()> {
//!     let channels = Gridwire::listen("0.0.0.0:20777").await?;
//!     let (mut packets, cancel) = channels.into_stream();
//!
//!     while let Some(packet) = packets.next().await {
//!         if let PacketBody::CarTelemetry(telemetry) = &packet.body {
//!             println!("cars on track: {}", telemetry.array("carTelemetryData").unwrap().len());
//!         }
//!     }
//!
//!     cancel.cancel();
//!     Ok(())
//! }
//! ```
//!
//! Decoding a buffer you already hold needs no runtime at all:
//!
//! ```rust,ignore
//! let packet = gridwire::decode_packet(&datagram)?;
//! println!("{:?} at t={}", packet.kind(), packet.header.session_time);
//! ```

pub mod decode;
mod error;
pub mod listener;
pub mod schema;
pub mod source;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod value;
pub mod wire;

// Core exports
pub use decode::{Packet, PacketBody, PacketHeader, decode_packet, decode_packet_with, peek_packet_id};
pub use error::{PacketError, Result};
pub use schema::{
    EventCode, GRID_SIZE, PacketKind, SchemaRegistry, registry,
};
pub use value::{Record, Value};
pub use wire::{Cursor, PrimType};

// Receive-layer exports
pub use listener::{Listener, ListenerChannels};
pub use source::{DEFAULT_PORT, MAX_DATAGRAM, PacketSource, UdpSource};

/// Unified entry point for telemetry sessions.
///
/// # Example
///
/// ```rust,no_run
/// use gridwire::Gridwire;
///
/// #[tokio::main]
/// async fn main() -> gridwire::Result<()> {
///     let channels = Gridwire::listen("0.0.0.0:20777").await?;
///     // Use channels.packets / channels.cancel...
///     Ok(())
/// }
/// ```
pub struct Gridwire;

impl Gridwire {
    /// Bind a UDP socket and start the decode task.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn listen(addr: impl tokio::net::ToSocketAddrs) -> Result<ListenerChannels> {
        let source = UdpSource::bind(addr).await?;
        Ok(Listener::spawn(source))
    }
}
