//! Static schema model for the telemetry protocol.
//!
//! Every packet layout is described once, at process start, as a tree of
//! [`FieldKind`] nodes: primitives at the leaves, fixed arrays, fixed
//! tuples, and nested records above them, plus the single event-payload
//! hole whose shape is only known after its discriminant is decoded.
//! Field order in a [`RecordSchema`] is the wire order — reordering two
//! fields silently corrupts every field after them, which makes the
//! tables in [`records`] and [`packets`] the most correctness-critical
//! data in the crate.
//!
//! The [`SchemaRegistry`] is built once and shared read-only by every
//! decode call; concurrent decodes need no locking.

mod events;
mod packets;
mod records;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use serde::Serialize;
use tracing::debug;

use crate::error::{PacketError, Result};
use crate::wire::PrimType;

pub use events::EventCode;

/// Protocol-fixed car count. Per-car arrays always hold this many
/// entries regardless of any "active cars" field in the same packet.
pub const GRID_SIZE: usize = 22;

/// Fixed marshal-zone array length in the session packet.
pub const MARSHAL_ZONE_COUNT: usize = 21;

/// Fixed weather-forecast array length in the session packet.
pub const WEATHER_SAMPLE_COUNT: usize = 56;

/// Fixed lap-history array length in the session-history packet.
/// `numLaps` in the same packet is informational only.
pub const LAP_HISTORY_LEN: usize = 100;

/// Fixed tyre-stint array length in the session-history packet.
pub const TYRE_STINT_LEN: usize = 8;

/// One node of a packet schema.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Fixed-width scalar.
    Prim(PrimType),
    /// `len` repetitions of one element kind. `len` is a compile-time
    /// protocol constant, never read from the buffer.
    Array { elem: Box<FieldKind>, len: usize },
    /// Ordered sequence of heterogeneous kinds.
    Tuple(Vec<FieldKind>),
    /// Nested composite record.
    Record(Arc<RecordSchema>),
    /// Discriminated-union payload. Has no intrinsic width; decoding it
    /// requires the event discriminant to already be known.
    EventPayload,
}

impl FieldKind {
    /// Statically-known wire width of this node, or `None` when the
    /// node contains the event-payload hole.
    pub fn wire_size(&self) -> Option<usize> {
        match self {
            FieldKind::Prim(prim) => Some(prim.wire_size()),
            FieldKind::Array { elem, len } => Some(elem.wire_size()? * len),
            FieldKind::Tuple(kinds) => kinds.iter().map(FieldKind::wire_size).sum(),
            FieldKind::Record(record) => record.wire_size(),
            FieldKind::EventPayload => None,
        }
    }
}

/// A named field inside a record schema.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn prim(name: &'static str, prim: PrimType) -> Self {
        Self { name, kind: FieldKind::Prim(prim) }
    }

    pub fn prim_array(name: &'static str, prim: PrimType, len: usize) -> Self {
        Self { name, kind: FieldKind::Array { elem: Box::new(FieldKind::Prim(prim)), len } }
    }

    pub fn record_array(name: &'static str, record: &Arc<RecordSchema>, len: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Array { elem: Box::new(FieldKind::Record(Arc::clone(record))), len },
        }
    }

    pub fn event_payload(name: &'static str) -> Self {
        Self { name, kind: FieldKind::EventPayload }
    }
}

/// An ordered field list with a cached total wire width.
#[derive(Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<Field>,
    wire_size: Option<usize>,
}

impl RecordSchema {
    /// Build a record schema, caching its total width. The width is
    /// `None` only for the event packet's payload record, which embeds
    /// the union hole.
    pub fn new(name: &'static str, fields: Vec<Field>) -> Arc<Self> {
        let wire_size = fields.iter().map(|f| f.kind.wire_size()).sum();
        Arc::new(Self { name, fields, wire_size })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn wire_size(&self) -> Option<usize> {
        self.wire_size
    }
}

/// The twelve packet kinds of the protocol, by wire identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PacketKind {
    Motion,
    Session,
    LapData,
    Event,
    Participants,
    CarSetups,
    CarTelemetry,
    CarStatus,
    FinalClassification,
    LobbyInfo,
    CarDamage,
    SessionHistory,
}

impl PacketKind {
    /// Wire value of the packet-type identifier.
    pub const fn id(self) -> u8 {
        match self {
            PacketKind::Motion => 0,
            PacketKind::Session => 1,
            PacketKind::LapData => 2,
            PacketKind::Event => 3,
            PacketKind::Participants => 4,
            PacketKind::CarSetups => 5,
            PacketKind::CarTelemetry => 6,
            PacketKind::CarStatus => 7,
            PacketKind::FinalClassification => 8,
            PacketKind::LobbyInfo => 9,
            PacketKind::CarDamage => 10,
            PacketKind::SessionHistory => 11,
        }
    }
}

/// A packet kind bound to its payload schema.
#[derive(Debug)]
pub struct PacketDescriptor {
    pub kind: PacketKind,
    /// Payload layout after the fixed header. For the event packet this
    /// contains the union hole and has no static width.
    pub payload: Arc<RecordSchema>,
}

impl PacketDescriptor {
    /// Statically-known payload width, `None` for the event packet.
    pub fn payload_wire_size(&self) -> Option<usize> {
        self.payload.wire_size()
    }
}

/// Read-only registry mapping packet ids to schemas, plus the event
/// discriminant table.
#[derive(Debug)]
pub struct SchemaRegistry {
    packets: HashMap<u8, PacketDescriptor>,
    events: HashMap<EventCode, Arc<RecordSchema>>,
}

impl SchemaRegistry {
    /// Build the registry for the 2022-format protocol.
    pub fn for_2022_format() -> Self {
        let packets = packets::packet_table();
        let events = events::event_table();
        debug!(
            packet_kinds = packets.len(),
            event_codes = events.len(),
            "built telemetry schema registry"
        );
        Self { packets, events }
    }

    /// Resolve a packet-type identifier to its descriptor.
    pub fn packet(&self, id: u8) -> Result<&PacketDescriptor> {
        self.packets.get(&id).ok_or(PacketError::UnknownPacketType { id })
    }

    /// Resolve an event discriminant to its detail schema.
    pub fn event_details(&self, code: EventCode) -> Result<&Arc<RecordSchema>> {
        self.events.get(&code).ok_or(PacketError::UnknownEventCode { code })
    }

    pub fn packet_count(&self) -> usize {
        self.packets.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// Process-wide registry, built on first use and never mutated after.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::for_2022_format);
    &REGISTRY
}
