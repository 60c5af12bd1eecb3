//! Vertex data unpacking utilities
//!
//! SM models store positions and texture coordinates as unsigned 16-bit
//! fixed point. A raw value maps linearly onto `[-scale, scale]`:
//!
//! ```text
//! unpack(raw, scale) = ((raw / 65535) * 2 - 1) * scale
//! ```
//!
//! The source format is left-handed, so Z is negated on unpack.

use glam::{Vec2, Vec3};

use crate::formats::PackedVertex;

/// Scale applied to the U texture coordinate
pub const UV_SCALE_U: f32 = 128.0;
/// Scale applied to the V texture coordinate. Negative: V is flipped.
pub const UV_SCALE_V: f32 = -128.0;

// ============================================================================
// Basic Conversion Functions
// ============================================================================

/// Convert a unorm16 value to a float in `[-scale, scale]`
#[inline]
pub fn unpack_unorm16(raw: u16, scale: f32) -> f32 {
    ((raw as f32 / 65535.0) * 2.0 - 1.0) * scale
}

// ============================================================================
// Position / UV Unpacking
// ============================================================================

/// Unpack a quantized position, converting to right-handed coordinates
#[inline]
pub fn unpack_position(raw: [u16; 3], scale: Vec3) -> Vec3 {
    Vec3::new(
        unpack_unorm16(raw[0], scale.x),
        unpack_unorm16(raw[1], scale.y),
        -unpack_unorm16(raw[2], scale.z),
    )
}

/// Unpack quantized texture coordinates
#[inline]
pub fn unpack_uv(raw: [u16; 2]) -> Vec2 {
    Vec2::new(
        unpack_unorm16(raw[0], UV_SCALE_U),
        unpack_unorm16(raw[1], UV_SCALE_V),
    )
}

/// Unpack a buffer of packed vertex records into positions and UVs
///
/// One position and one UV per whole record, index-aligned. Bytes past the
/// last whole record are ignored.
pub fn unpack_vertices<V: PackedVertex>(data: &[u8], scale: Vec3) -> (Vec<Vec3>, Vec<Vec2>) {
    let count = data.len() / V::SIZE;
    let mut positions = Vec::with_capacity(count);
    let mut uvs = Vec::with_capacity(count);

    for record in data.chunks_exact(V::SIZE).filter_map(V::from_bytes) {
        positions.push(unpack_position(record.position(), scale));
        uvs.push(unpack_uv(record.tex_coords()));
    }

    (positions, uvs)
}
