//! Fixed packet header.
//!
//! Every datagram starts with the same 24-byte header; its layout never
//! varies with the payload, which is what makes the packet-type
//! identifier readable before any payload schema is chosen.

use serde::Serialize;

use crate::error::Result;
use crate::wire::Cursor;

/// Decoded packet header, common prefix of every packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketHeader {
    /// Protocol format year (e.g. 2022). Informational only; the
    /// decoder does not branch on it.
    pub packet_format: u16,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    /// Version of this packet type.
    pub packet_version: u8,
    /// Packet-type identifier; drives schema dispatch.
    pub packet_id: u8,
    /// Unique session identifier.
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Frame the data was retrieved on.
    pub frame_identifier: u32,
    pub player_car_index: u8,
    /// 255 when there is no second player.
    pub secondary_player_car_index: u8,
}

impl PacketHeader {
    /// Encoded header length, constant across all packet types.
    pub const WIRE_SIZE: usize = 24;

    /// Byte offset of `packet_id` within the header.
    pub const PACKET_ID_OFFSET: usize = 5;

    /// Decode the header at the cursor, advancing past it.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            packet_format: cursor.read_u16()?,
            game_major_version: cursor.read_u8()?,
            game_minor_version: cursor.read_u8()?,
            packet_version: cursor.read_u8()?,
            packet_id: cursor.read_u8()?,
            session_uid: cursor.read_u64()?,
            session_time: cursor.read_f32()?,
            frame_identifier: cursor.read_u32()?,
            player_car_index: cursor.read_u8()?,
            secondary_player_car_index: cursor.read_u8()?,
        })
    }
}

/// Read the packet-type identifier at its fixed offset without decoding
/// the rest of the header.
pub fn peek_packet_id(buf: &[u8]) -> Result<u8> {
    let mut cursor = Cursor::new(buf);
    for _ in 0..PacketHeader::PACKET_ID_OFFSET {
        cursor.read_u8()?;
    }
    cursor.read_u8()
}
