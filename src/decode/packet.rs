//! Whole-packet decode: header, dispatch, payload, union resolution.
//!
//! Non-event packets are single-phase: the header's packet id selects
//! the payload schema and one recursive decode walks it. The event
//! packet is two-phase: first the 4-byte discriminant directly after the
//! header, then the detail record that discriminant selects. Sibling
//! variants are never decoded or allocated, and the payload region's
//! length equals the selected variant's length exactly — event packets
//! are not padded to the widest variant.

use serde::Serialize;

use super::decode_record;
use super::header::PacketHeader;
use crate::error::{PacketError, Result};
use crate::schema::{EventCode, PacketKind, SchemaRegistry, registry};
use crate::value::Record;
use crate::wire::Cursor;

/// One fully-decoded packet: header plus kind-resolved payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Packet {
    pub header: PacketHeader,
    pub body: PacketBody,
}

impl Packet {
    pub fn kind(&self) -> PacketKind {
        self.body.kind()
    }
}

/// Payload of a decoded packet, by packet kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PacketBody {
    Motion(Record),
    Session(Record),
    LapData(Record),
    Event { code: EventCode, details: Record },
    Participants(Record),
    CarSetups(Record),
    CarTelemetry(Record),
    CarStatus(Record),
    FinalClassification(Record),
    LobbyInfo(Record),
    CarDamage(Record),
    SessionHistory(Record),
}

impl PacketBody {
    pub fn kind(&self) -> PacketKind {
        match self {
            PacketBody::Motion(_) => PacketKind::Motion,
            PacketBody::Session(_) => PacketKind::Session,
            PacketBody::LapData(_) => PacketKind::LapData,
            PacketBody::Event { .. } => PacketKind::Event,
            PacketBody::Participants(_) => PacketKind::Participants,
            PacketBody::CarSetups(_) => PacketKind::CarSetups,
            PacketBody::CarTelemetry(_) => PacketKind::CarTelemetry,
            PacketBody::CarStatus(_) => PacketKind::CarStatus,
            PacketBody::FinalClassification(_) => PacketKind::FinalClassification,
            PacketBody::LobbyInfo(_) => PacketKind::LobbyInfo,
            PacketBody::CarDamage(_) => PacketKind::CarDamage,
            PacketBody::SessionHistory(_) => PacketKind::SessionHistory,
        }
    }

    /// The payload record. For event packets this is the detail record.
    pub fn record(&self) -> &Record {
        match self {
            PacketBody::Motion(record)
            | PacketBody::Session(record)
            | PacketBody::LapData(record)
            | PacketBody::Event { details: record, .. }
            | PacketBody::Participants(record)
            | PacketBody::CarSetups(record)
            | PacketBody::CarTelemetry(record)
            | PacketBody::CarStatus(record)
            | PacketBody::FinalClassification(record)
            | PacketBody::LobbyInfo(record)
            | PacketBody::CarDamage(record)
            | PacketBody::SessionHistory(record) => record,
        }
    }
}

/// Decode one complete packet against the process-wide registry.
pub fn decode_packet(buf: &[u8]) -> Result<Packet> {
    decode_packet_with(registry(), buf)
}

/// Decode one complete packet against an explicit registry.
pub fn decode_packet_with(registry: &SchemaRegistry, buf: &[u8]) -> Result<Packet> {
    let mut cursor = Cursor::new(buf);
    let header = PacketHeader::decode(&mut cursor)?;
    let descriptor = registry.packet(header.packet_id)?;

    let body = if descriptor.kind == PacketKind::Event {
        // Phase 1: the discriminant, at the same offset for every event
        // packet. Phase 2: only the selected variant's schema.
        let code = EventCode(cursor.read_bytes::<4>()?);
        let details_schema = registry.event_details(code)?;
        let details = decode_record(&mut cursor, details_schema)?;
        PacketBody::Event { code, details }
    } else {
        let record = decode_record(&mut cursor, &descriptor.payload)?;
        match descriptor.kind {
            PacketKind::Motion => PacketBody::Motion(record),
            PacketKind::Session => PacketBody::Session(record),
            PacketKind::LapData => PacketBody::LapData(record),
            PacketKind::Participants => PacketBody::Participants(record),
            PacketKind::CarSetups => PacketBody::CarSetups(record),
            PacketKind::CarTelemetry => PacketBody::CarTelemetry(record),
            PacketKind::CarStatus => PacketBody::CarStatus(record),
            PacketKind::FinalClassification => PacketBody::FinalClassification(record),
            PacketKind::LobbyInfo => PacketBody::LobbyInfo(record),
            PacketKind::CarDamage => PacketBody::CarDamage(record),
            PacketKind::SessionHistory => PacketBody::SessionHistory(record),
            // The single-phase path cannot resolve a union payload.
            PacketKind::Event => return Err(PacketError::MissingDiscriminant),
        }
    };

    Ok(Packet { header, body })
}
