//! Decoded SM model

use std::fmt;

use glam::{Vec2, Vec3};

use crate::formats::{AttributeRange, SmHeader, SmVersion};

/// A fully decoded SM0/SM1 model
///
/// Created by [`crate::decode_file`] / [`crate::decode_bytes`]. The decoder
/// guarantees that `indices.len()` is a multiple of 3, `uvs.len() ==
/// vertices.len()`, and every attribute range references existing faces and
/// materials. Indices are below `vertices.len()` for well-formed files and
/// always when decoded with [`crate::DecodeConfig::strict_indices`].
#[derive(Debug, Clone, PartialEq)]
pub struct SmModel {
    /// Format version the model was decoded as
    pub version: SmVersion,
    /// Header as read from the file
    pub header: SmHeader,
    /// Vertex positions (right-handed)
    pub vertices: Vec<Vec3>,
    /// Texture coordinates, parallel to `vertices`
    pub uvs: Vec<Vec2>,
    /// Triangle list indices
    pub indices: Vec<u16>,
    /// Texture names, indexed by `AttributeRange::material_index`
    pub textures: Vec<String>,
    /// Material assignment per face run, in file order
    pub attribute_ranges: Vec<AttributeRange>,
}

impl SmModel {
    /// Number of triangles in the index buffer
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index triple of triangle `face`
    pub fn triangle(&self, face: usize) -> Option<[u16; 3]> {
        let tri = self.indices.get(face * 3..face * 3 + 3)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// Texture name used by an attribute range
    pub fn material_name(&self, range: &AttributeRange) -> Option<&str> {
        self.textures
            .get(range.material_index as usize)
            .map(String::as_str)
    }

    /// Counts for logging and `--inspect`
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            version: self.version,
            vertex_count: self.vertices.len(),
            uv_count: self.uvs.len(),
            triangle_count: self.triangle_count(),
            material_count: self.textures.len(),
            declared_index_count: self.header.indices_len,
            declared_vertex_count: self.header.vln,
        }
    }
}

/// Model statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSummary {
    pub version: SmVersion,
    pub vertex_count: usize,
    pub uv_count: usize,
    pub triangle_count: usize,
    pub material_count: usize,
    /// `indices_len` from the header (advisory)
    pub declared_index_count: u32,
    /// `vln` from the header (advisory)
    pub declared_vertex_count: u32,
}

impl ModelSummary {
    /// Whether the advisory header counts agree with the decoded data
    pub fn matches_declared(&self) -> bool {
        self.declared_index_count as usize == self.triangle_count * 3
            && self.declared_vertex_count as usize == self.vertex_count
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vertices, {} UVs, {} triangles, {} materials",
            self.version, self.vertex_count, self.uv_count, self.triangle_count, self.material_count
        )
    }
}
