//! Error types for packet decoding and the UDP receive layer.
//!
//! Every decode failure is surfaced to the immediate caller as a
//! distinguishable value; the decoder itself never logs, never retries,
//! and never substitutes defaults for unreadable fields. Recovery policy
//! (skip the datagram vs. abort) belongs to the caller — see
//! [`PacketError::is_recoverable`].

use thiserror::Error;

use crate::schema::EventCode;

/// Result type alias for decode and receive operations.
pub type Result<T, E = PacketError> = std::result::Result<T, E>;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PacketError {
    /// The buffer ended before the schema did. Fatal to this decode;
    /// a retry requires a fresh datagram from the network layer.
    #[error("buffer truncated at offset {offset}: need {needed} more bytes, {available} available")]
    TruncatedBuffer { offset: usize, needed: usize, available: usize },

    /// The header's packet-type identifier has no registry entry.
    /// Usually a protocol version mismatch or a forward-incompatible
    /// extension; the caller may drop the datagram and continue.
    #[error("unknown packet type {id}")]
    UnknownPacketType { id: u8 },

    /// The event packet's 4-byte discriminant has no mapped payload.
    #[error("unknown event code {code}")]
    UnknownEventCode { code: EventCode },

    /// An event-payload schema node was decoded without a resolved
    /// discriminant. This is a schema-authoring bug, not a data error.
    #[error("event payload decoded without a resolved discriminant")]
    MissingDiscriminant,

    /// The UDP socket failed to bind or receive.
    #[error("socket error: {context}")]
    Socket {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener's packet channel closed while the task was running.
    #[error("packet channel closed")]
    ChannelClosed,
}

impl PacketError {
    /// Whether the caller can drop the offending datagram and keep
    /// listening. Data errors and transient socket failures are
    /// recoverable; `MissingDiscriminant` means the static schema table
    /// is wrong and no amount of fresh traffic will fix it.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PacketError::TruncatedBuffer { .. } => true,
            PacketError::UnknownPacketType { .. } => true,
            PacketError::UnknownEventCode { .. } => true,
            PacketError::Socket { .. } => true,
            PacketError::MissingDiscriminant => false,
            PacketError::ChannelClosed => false,
        }
    }

    /// Helper constructor for socket errors with operation context.
    pub fn socket(context: impl Into<String>, source: std::io::Error) -> Self {
        PacketError::Socket { context: context.into(), source }
    }
}
