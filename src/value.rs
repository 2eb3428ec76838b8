//! Decoded value tree.
//!
//! The decoder produces a [`Value`] for every schema node: primitives at
//! the leaves, arrays/tuples/records as the composites. Field names come
//! from the static schema, so records borrow them for the lifetime of
//! the process. Values serialize with `serde` for downstream display and
//! logging; the protocol is receive-only, so nothing deserializes back.

use serde::Serialize;

/// A single decoded value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    /// Fixed-size repetition of one element kind.
    Array(Vec<Value>),
    /// Fixed-size sequence of heterogeneous kinds.
    Tuple(Vec<Value>),
    Record(Record),
}

impl Value {
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Value::U8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::I8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Value::U16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::I16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// A decoded record: field values in schema (wire) order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new(fields: Vec<(&'static str, Value)>) -> Self {
        Self { fields }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Iterate fields in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convenience typed lookups
    pub fn u8(&self, name: &str) -> Option<u8> {
        self.get(name)?.as_u8()
    }

    pub fn u16(&self, name: &str) -> Option<u16> {
        self.get(name)?.as_u16()
    }

    pub fn u32(&self, name: &str) -> Option<u32> {
        self.get(name)?.as_u32()
    }

    pub fn f32(&self, name: &str) -> Option<f32> {
        self.get(name)?.as_f32()
    }

    pub fn array(&self, name: &str) -> Option<&[Value]> {
        self.get(name)?.as_array()
    }

    /// Read a fixed `Array(U8, n)` field back as a string, stopping at
    /// the first NUL. Used for driver names in participants and lobby
    /// records.
    pub fn utf8_lossy(&self, name: &str) -> Option<String> {
        let values = self.array(name)?;
        let bytes: Vec<u8> = values.iter().map_while(Value::as_u8).collect();
        if bytes.len() != values.len() {
            return None;
        }
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Some(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }
}
