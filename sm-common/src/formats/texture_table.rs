//! Texture table records
//!
//! The table follows the header as two contiguous arrays, each
//! `textures_len` long:
//!
//! ```text
//! textures_len x { len u8, str [u8; 50] }             // 51 bytes each
//! textures_len x { material_index u32, face_start u32,
//!                  face_count u32, vertex_start u32,
//!                  vertex_count u32 }                 // 20 bytes each
//! ```

use std::ops::Range;

/// Maximum payload length of a texture name record
pub const TEXTURE_NAME_MAX_LEN: usize = 50;

/// Length-prefixed texture name (51 bytes)
///
/// Only the first `len` bytes of `data` belong to the name. A `len` above
/// [`TEXTURE_NAME_MAX_LEN`] is representable on disk but invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureNameRecord {
    pub len: u8,
    pub data: [u8; TEXTURE_NAME_MAX_LEN],
}

impl TextureNameRecord {
    pub const SIZE: usize = 1 + TEXTURE_NAME_MAX_LEN;

    /// Build a record from a name. Returns `None` if the name does not fit.
    pub fn new(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() > TEXTURE_NAME_MAX_LEN {
            return None;
        }
        let mut data = [0u8; TEXTURE_NAME_MAX_LEN];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Write record to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.len;
        bytes[1..].copy_from_slice(&self.data);
        bytes
    }

    /// Read record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let mut data = [0u8; TEXTURE_NAME_MAX_LEN];
        data.copy_from_slice(&bytes[1..Self::SIZE]);
        Some(Self {
            len: bytes[0],
            data,
        })
    }

    /// Decode the name, one byte per character (Latin-1).
    ///
    /// Returns `None` if the length prefix is out of bounds.
    pub fn name(&self) -> Option<String> {
        let payload = self.data.get(..self.len as usize)?;
        Some(payload.iter().map(|&b| b as char).collect())
    }
}

/// Which material applies to which run of faces (20 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeRange {
    /// Index into the texture name table
    pub material_index: u32,
    /// First triangle of the run
    pub face_start: u32,
    /// Number of triangles in the run
    pub face_count: u32,
    pub vertex_start: u32,
    pub vertex_count: u32,
}

impl AttributeRange {
    pub const SIZE: usize = 20;

    /// Write record to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.material_index.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.face_start.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.face_count.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.vertex_start.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.vertex_count.to_le_bytes());
        bytes
    }

    /// Read record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let u32_at =
            |o: usize| u32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        Some(Self {
            material_index: u32_at(0),
            face_start: u32_at(4),
            face_count: u32_at(8),
            vertex_start: u32_at(12),
            vertex_count: u32_at(16),
        })
    }

    /// One past the last face of the run (computed without overflow)
    pub fn face_end(&self) -> u64 {
        self.face_start as u64 + self.face_count as u64
    }

    /// Face indices covered by this run
    pub fn faces(&self) -> Range<usize> {
        self.face_start as usize..self.face_end() as usize
    }
}
