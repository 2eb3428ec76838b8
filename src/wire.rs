//! Wire-level primitive codec.
//!
//! Everything on the wire is little-endian with no padding and no length
//! prefixes: a field's width is implied solely by its position in the
//! schema. [`Cursor`] tracks the running byte offset of one decode
//! operation; every read advances by exactly the primitive's width or
//! fails with `TruncatedBuffer` before consuming anything.

use serde::Serialize;

use crate::error::{PacketError, Result};
use crate::value::Value;

/// Fixed-width primitive kinds the protocol uses.
///
/// Each kind knows its own wire width; there is no separate width table
/// to drift out of sync with the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl PrimType {
    /// Width of this primitive on the wire, in bytes.
    pub const fn wire_size(self) -> usize {
        match self {
            PrimType::U8 | PrimType::I8 => 1,
            PrimType::U16 | PrimType::I16 => 2,
            PrimType::U32 | PrimType::I32 | PrimType::F32 => 4,
            PrimType::U64 | PrimType::I64 | PrimType::F64 => 8,
        }
    }
}

/// Running byte offset into an immutable packet buffer.
///
/// One cursor is private to one decode operation; after decoding any
/// schema node it has advanced by exactly that node's wire size.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.buf.get(self.pos..self.pos + len).ok_or(PacketError::TruncatedBuffer {
            offset: self.pos,
            needed: len,
            available: self.buf.len().saturating_sub(self.pos),
        })?;
        self.pos += len;
        Ok(bytes)
    }

    /// Read a fixed-size byte array, advancing by `N`.
    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_bytes()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_bytes()?))
    }

    /// Decode one primitive of the given kind at the cursor.
    pub fn read_prim(&mut self, prim: PrimType) -> Result<Value> {
        Ok(match prim {
            PrimType::U8 => Value::U8(self.read_u8()?),
            PrimType::I8 => Value::I8(self.read_i8()?),
            PrimType::U16 => Value::U16(self.read_u16()?),
            PrimType::I16 => Value::I16(self.read_i16()?),
            PrimType::U32 => Value::U32(self.read_u32()?),
            PrimType::I32 => Value::I32(self.read_i32()?),
            PrimType::U64 => Value::U64(self.read_u64()?),
            PrimType::I64 => Value::I64(self.read_i64()?),
            PrimType::F32 => Value::F32(self.read_f32()?),
            PrimType::F64 => Value::F64(self.read_f64()?),
        })
    }
}
