//! Shared helpers for building synthetic packet buffers.
#![allow(dead_code)]

/// A plausible 2022-format header carrying the given packet id.
pub fn header(packet_id: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(24);
    buf.push_u16(2022); // packetFormat
    buf.push_u8(1); // gameMajorVersion
    buf.push_u8(18); // gameMinorVersion
    buf.push_u8(1); // packetVersion
    buf.push_u8(packet_id);
    buf.push_u64(0xABCD_EF01_2345_6789); // sessionUID
    buf.push_f32(12.25); // sessionTime
    buf.push_u32(777); // frameIdentifier
    buf.push_u8(19); // playerCarIndex
    buf.push_u8(255); // secondaryPlayerCarIndex
    buf
}

/// Zero-fill `buf` up to `total_len` bytes.
pub fn pad_to(buf: &mut Vec<u8>, total_len: usize) {
    assert!(buf.len() <= total_len, "buffer already longer than {total_len}");
    buf.resize(total_len, 0);
}

/// Little-endian push helpers over a byte vector.
pub trait WireWriter {
    fn push_u8(&mut self, value: u8);
    fn push_i8(&mut self, value: i8);
    fn push_u16(&mut self, value: u16);
    fn push_i16(&mut self, value: i16);
    fn push_u32(&mut self, value: u32);
    fn push_u64(&mut self, value: u64);
    fn push_f32(&mut self, value: f32);
    fn push_f64(&mut self, value: f64);
}

impl WireWriter for Vec<u8> {
    fn push_u8(&mut self, value: u8) {
        self.push(value);
    }

    fn push_i8(&mut self, value: i8) {
        self.push(value as u8);
    }

    fn push_u16(&mut self, value: u16) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn push_i16(&mut self, value: i16) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn push_u32(&mut self, value: u32) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn push_u64(&mut self, value: u64) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn push_f32(&mut self, value: f32) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn push_f64(&mut self, value: f64) {
        self.extend_from_slice(&value.to_le_bytes());
    }
}
