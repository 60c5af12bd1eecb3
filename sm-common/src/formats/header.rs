//! SM model file header (.sm0 / .sm1)
//!
//! # Layout
//! ```text
//! 0x00: textures_len u32
//! 0x04: indices_len u32              (advisory)
//! 0x08: vln u32                      (advisory vertex count)
//! 0x0C: indices_comp_len u32
//! 0x10: packed_vertices_comp_len u32
//! 0x14: scale f32 x 3
//! 0x20: texture table, then the two zlib streams
//! ```

use glam::Vec3;

/// SM model header (32 bytes)
///
/// Note: Not packed - we use explicit byte serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct SmHeader {
    /// Number of texture names (and attribute ranges)
    pub textures_len: u32,
    /// Index count as written by the exporter. Not trusted.
    pub indices_len: u32,
    /// Vertex count as written by the exporter. Not trusted.
    pub vln: u32,
    /// Size of the compressed index stream in bytes
    pub indices_comp_len: u32,
    /// Size of the compressed packed vertex stream in bytes
    pub packed_vertices_comp_len: u32,
    /// De-quantization scale for positions
    pub scale: Vec3,
}

impl SmHeader {
    pub const SIZE: usize = 32;

    pub fn new(
        textures_len: u32,
        indices_comp_len: u32,
        packed_vertices_comp_len: u32,
        scale: Vec3,
    ) -> Self {
        Self {
            textures_len,
            indices_len: 0,
            vln: 0,
            indices_comp_len,
            packed_vertices_comp_len,
            scale,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.textures_len.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.indices_len.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.vln.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.indices_comp_len.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.packed_vertices_comp_len.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.scale.x.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.scale.y.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.scale.z.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let u32_at =
            |o: usize| u32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        let f32_at =
            |o: usize| f32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        Some(Self {
            textures_len: u32_at(0),
            indices_len: u32_at(4),
            vln: u32_at(8),
            indices_comp_len: u32_at(12),
            packed_vertices_comp_len: u32_at(16),
            scale: Vec3::new(f32_at(20), f32_at(24), f32_at(28)),
        })
    }

    /// Validate header
    pub fn validate(&self) -> bool {
        self.scale.is_finite()
    }
}
