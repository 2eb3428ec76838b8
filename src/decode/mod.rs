//! Recursive schema-driven decoder.
//!
//! One function walks a [`FieldKind`] tree with a [`Cursor`], consuming
//! exactly the bytes the schema implies: primitives delegate to the wire
//! codec, arrays and tuples recurse element by element in order, records
//! recurse field by field in declared order. Decoding is deterministic
//! and pure; the first truncation aborts the whole packet decode with no
//! partial result.
//!
//! The event-payload node is the single exception: its shape depends on
//! a discriminant decoded elsewhere, so reaching it through this entry
//! point is a schema-authoring bug surfaced as `MissingDiscriminant`.
//! [`decode_packet`] owns the two-phase path that resolves it.

mod header;
mod packet;

pub use header::{PacketHeader, peek_packet_id};
pub use packet::{Packet, PacketBody, decode_packet, decode_packet_with};

use crate::error::{PacketError, Result};
use crate::schema::{FieldKind, RecordSchema};
use crate::value::{Record, Value};
use crate::wire::Cursor;

/// Decode one schema node at the cursor.
pub fn decode_field(cursor: &mut Cursor<'_>, kind: &FieldKind) -> Result<Value> {
    match kind {
        FieldKind::Prim(prim) => cursor.read_prim(*prim),
        FieldKind::Array { elem, len } => {
            let mut values = Vec::with_capacity(*len);
            for _ in 0..*len {
                values.push(decode_field(cursor, elem)?);
            }
            Ok(Value::Array(values))
        }
        FieldKind::Tuple(kinds) => {
            let mut values = Vec::with_capacity(kinds.len());
            for kind in kinds {
                values.push(decode_field(cursor, kind)?);
            }
            Ok(Value::Tuple(values))
        }
        FieldKind::Record(schema) => Ok(Value::Record(decode_record(cursor, schema)?)),
        FieldKind::EventPayload => Err(PacketError::MissingDiscriminant),
    }
}

/// Decode a record's fields in declared order.
pub fn decode_record(cursor: &mut Cursor<'_>, schema: &RecordSchema) -> Result<Record> {
    let mut fields = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        fields.push((field.name, decode_field(cursor, &field.kind)?));
    }
    Ok(Record::new(fields))
}
