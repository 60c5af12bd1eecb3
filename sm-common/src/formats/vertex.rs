//! Packed vertex records
//!
//! Both versions start with the same 10 bytes:
//!
//! ```text
//! 0x00: position u16 x 3   (unorm16, see packing::unpack_unorm16)
//! 0x06: tu u16
//! 0x08: tv u16
//! ```
//!
//! SM0 follows with two u8 light-map coordinates (12 bytes total). SM1
//! carries 6 bytes of light-map data instead (16 bytes total). Neither
//! light-map field is used when decoding.

/// A fixed-size quantized vertex record
pub trait PackedVertex: Sized {
    /// Record size in bytes
    const SIZE: usize;

    /// Read a record from bytes. Returns `None` if `bytes` is too short.
    fn from_bytes(bytes: &[u8]) -> Option<Self>;

    /// Quantized position (x, y, z)
    fn position(&self) -> [u16; 3];

    /// Quantized texture coordinates (u, v)
    fn tex_coords(&self) -> [u16; 2];
}

/// Read the 10-byte prefix shared by both layouts
#[inline]
fn read_common(bytes: &[u8]) -> ([u16; 3], [u16; 2]) {
    let u16_at = |o: usize| u16::from_le_bytes([bytes[o], bytes[o + 1]]);
    ([u16_at(0), u16_at(2), u16_at(4)], [u16_at(6), u16_at(8)])
}

/// SM0 packed vertex (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedVertexLegacy {
    pub position: [u16; 3],
    pub tex_coords: [u16; 2],
    /// Light-map coordinates. Never read.
    pub light_uv: [u8; 2],
}

impl PackedVertex for PackedVertexLegacy {
    const SIZE: usize = 12;

    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let (position, tex_coords) = read_common(bytes);
        Some(Self {
            position,
            tex_coords,
            light_uv: [bytes[10], bytes[11]],
        })
    }

    fn position(&self) -> [u16; 3] {
        self.position
    }

    fn tex_coords(&self) -> [u16; 2] {
        self.tex_coords
    }
}

/// SM1 packed vertex (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedVertexCurrent {
    pub position: [u16; 3],
    pub tex_coords: [u16; 2],
    /// Light-map data. Opaque, never read.
    pub light_data: [u8; 6],
}

impl PackedVertex for PackedVertexCurrent {
    const SIZE: usize = 16;

    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let (position, tex_coords) = read_common(bytes);
        let mut light_data = [0u8; 6];
        light_data.copy_from_slice(&bytes[10..16]);
        Some(Self {
            position,
            tex_coords,
            light_data,
        })
    }

    fn position(&self) -> [u16; 3] {
        self.position
    }

    fn tex_coords(&self) -> [u16; 2] {
        self.tex_coords
    }
}
