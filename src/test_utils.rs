//! Synthetic packet construction for unit tests and benchmarks.
//!
//! Builds byte buffers field by field in wire order, little-endian, so
//! tests control exactly what the decoder sees without any fixture
//! files.

/// Little-endian buffer builder starting from a plausible 24-byte
/// header.
#[derive(Debug, Clone)]
pub struct PacketBuilder {
    bytes: Vec<u8>,
}

impl PacketBuilder {
    /// Start a buffer with a 2022-format header carrying `packet_id`.
    pub fn with_header(packet_id: u8) -> Self {
        Self { bytes: Vec::new() }
            .u16(2022) // packetFormat
            .u8(1) // gameMajorVersion
            .u8(18) // gameMinorVersion
            .u8(1) // packetVersion
            .u8(packet_id)
            .u64(0x5355_5045_5253_5457) // sessionUID
            .f32(42.5) // sessionTime
            .u32(1000) // frameIdentifier
            .u8(0) // playerCarIndex
            .u8(255) // secondaryPlayerCarIndex
    }

    /// Start an empty buffer with no header.
    pub fn raw() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.bytes.push(value);
        self
    }

    pub fn i8(mut self, value: i8) -> Self {
        self.bytes.push(value as u8);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn i16(mut self, value: i16) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u64(mut self, value: u64) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn f32(mut self, value: f32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn f64(mut self, value: f64) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(mut self, value: &[u8]) -> Self {
        self.bytes.extend_from_slice(value);
        self
    }

    /// Append `len` zero bytes.
    pub fn zeros(mut self, len: usize) -> Self {
        self.bytes.resize(self.bytes.len() + len, 0);
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// A complete zero-filled packet of the given id, sized from the
/// registry. Handy when a test only cares about one spliced-in field.
pub fn zeroed_packet(packet_id: u8) -> Vec<u8> {
    let descriptor = crate::schema::registry().packet(packet_id).expect("known packet id");
    let payload = descriptor.payload_wire_size().expect("static payload width");
    PacketBuilder::with_header(packet_id).zeros(payload).build()
}
