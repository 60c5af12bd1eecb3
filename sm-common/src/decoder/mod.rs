//! SM0/SM1 model decoder
//!
//! Parses the header and texture table, inflates the index and packed
//! vertex streams, and unpacks the quantized vertices into an [`SmModel`].
//!
//! # Pipeline
//!
//! 1. Version from the file name suffix (no I/O on failure)
//! 2. Header (32 bytes) and scale check
//! 3. Texture names, then attribute ranges (`textures_len` each)
//! 4. Index stream -> `u16` triangle list
//! 5. Packed vertex stream -> positions + UVs, using the version's layout
//! 6. Bounds checks on attribute ranges (and indices, when strict)


use std::path::Path;

use crate::error::{DecodeError, DecodeResult};
use crate::formats::{
    AttributeRange, BinarySerializable, PackedVertex, PackedVertexCurrent, PackedVertexLegacy,
    SmHeader, SmVersion, TEXTURE_NAME_MAX_LEN, TextureNameRecord, read_array,
};
use crate::inflate::{DEFAULT_MAX_DECOMPRESSED_SIZE, inflate};
use crate::model::SmModel;
use crate::packing::unpack_vertices;

/// Decoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Ceiling for each decompressed stream, in bytes
    pub max_decompressed_size: usize,
    /// Reject indices that reference missing vertices instead of warning
    pub strict_indices: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            strict_indices: false,
        }
    }
}

/// Decode an SM0/SM1 file from disk
///
/// The version is taken from the last character of the file name. An
/// unrecognized suffix fails before the file is opened.
pub fn decode_file(path: &Path, config: &DecodeConfig) -> DecodeResult<SmModel> {
    let version = SmVersion::from_path(path).ok_or_else(|| DecodeError::UnknownVersion {
        path: path.to_path_buf(),
    })?;
    tracing::info!("Treating {} as {}", path.display(), version);

    let data = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    decode_bytes(&data, version, config)
}

/// Decode an in-memory SM0/SM1 model
pub fn decode_bytes(
    data: &[u8],
    version: SmVersion,
    config: &DecodeConfig,
) -> DecodeResult<SmModel> {
    match version {
        SmVersion::Legacy => decode_with::<PackedVertexLegacy>(data, version, config),
        SmVersion::Current => decode_with::<PackedVertexCurrent>(data, version, config),
    }
}

/// Sequential reader over the file contents
struct SectionReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> SectionReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn truncated(&self, section: &'static str, needed: u64) -> DecodeError {
        DecodeError::TruncatedFile {
            section,
            offset: self.offset,
            needed,
            available: self.remaining(),
        }
    }

    /// Take the next `len` bytes
    fn take(&mut self, section: &'static str, len: u64) -> DecodeResult<&'a [u8]> {
        if len > self.remaining() as u64 {
            return Err(self.truncated(section, len));
        }
        let start = self.offset;
        self.offset += len as usize;
        Ok(&self.data[start..self.offset])
    }

    /// Take one fixed-size record
    fn record<T: BinarySerializable>(&mut self, section: &'static str) -> DecodeResult<T> {
        let bytes = self.take(section, T::SIZE as u64)?;
        T::deserialize(bytes).ok_or_else(|| self.truncated(section, T::SIZE as u64))
    }

    /// Take `count` contiguous fixed-size records
    fn records<T: BinarySerializable>(
        &mut self,
        section: &'static str,
        count: u32,
    ) -> DecodeResult<Vec<T>> {
        let needed = count as u64 * T::SIZE as u64;
        let bytes = self.take(section, needed)?;
        read_array(bytes, count as usize).ok_or_else(|| self.truncated(section, needed))
    }
}

fn decode_with<V: PackedVertex>(
    data: &[u8],
    version: SmVersion,
    config: &DecodeConfig,
) -> DecodeResult<SmModel> {
    let mut reader = SectionReader::new(data);

    tracing::info!("Reading header...");
    let header: SmHeader = reader.record("header")?;
    if !header.validate() {
        return Err(DecodeError::NonFiniteScale {
            x: header.scale.x,
            y: header.scale.y,
            z: header.scale.z,
        });
    }
    tracing::debug!(
        textures_len = header.textures_len,
        indices_len = header.indices_len,
        vln = header.vln,
        indices_comp_len = header.indices_comp_len,
        packed_vertices_comp_len = header.packed_vertices_comp_len,
        "scale = {}",
        header.scale
    );

    tracing::info!("Reading texture table and attribute table...");
    let names: Vec<TextureNameRecord> = reader.records("texture names", header.textures_len)?;
    let textures = names
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record.name().ok_or(DecodeError::MalformedTextureName {
                index,
                len: record.len,
                max: TEXTURE_NAME_MAX_LEN,
            })
        })
        .collect::<DecodeResult<Vec<String>>>()?;
    let attribute_ranges: Vec<AttributeRange> =
        reader.records("attribute ranges", header.textures_len)?;

    for (i, (name, range)) in textures.iter().zip(&attribute_ranges).enumerate() {
        tracing::debug!(
            "Texture {}: {} (material {}, faces {}+{}, vertices {}+{})",
            i,
            name,
            range.material_index,
            range.face_start,
            range.face_count,
            range.vertex_start,
            range.vertex_count
        );
    }

    tracing::info!("Decompressing indices...");
    let compressed = reader.take("compressed indices", header.indices_comp_len as u64)?;
    let index_bytes = inflate(compressed, config.max_decompressed_size, "indices")?;
    tracing::debug!("Decompressed indices length: {}", index_bytes.len());
    if index_bytes.len() % 6 != 0 {
        return Err(DecodeError::MisalignedIndexBuffer {
            len: index_bytes.len(),
        });
    }
    let indices: Vec<u16> = index_bytes
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect();

    tracing::info!("Decompressing packed vertices...");
    let compressed = reader.take(
        "compressed packed vertices",
        header.packed_vertices_comp_len as u64,
    )?;
    let vertex_bytes = inflate(compressed, config.max_decompressed_size, "packed vertices")?;
    tracing::debug!("Decompressed packed vertices length: {}", vertex_bytes.len());

    let partial = vertex_bytes.len() % V::SIZE;
    if partial != 0 {
        tracing::warn!(
            "Packed vertex stream has {} trailing bytes (record size {}), ignoring them",
            partial,
            V::SIZE
        );
    }
    if reader.remaining() > 0 {
        tracing::debug!("{} unread bytes after packed vertices", reader.remaining());
    }

    tracing::info!("Extracting vertices and UVs from packed vertices...");
    let (vertices, uvs) = unpack_vertices::<V>(&vertex_bytes, header.scale);

    if let Err(err) = check_indices(&indices, vertices.len()) {
        if config.strict_indices {
            return Err(err);
        }
        tracing::warn!("{}", err);
    }
    check_attribute_ranges(&attribute_ranges, indices.len() / 3, textures.len())?;

    let model = SmModel {
        version,
        header,
        vertices,
        uvs,
        indices,
        textures,
        attribute_ranges,
    };

    let summary = model.summary();
    if !summary.matches_declared() {
        tracing::debug!(
            "Header declares {} indices / {} vertices, decoded {} / {}",
            summary.declared_index_count,
            summary.declared_vertex_count,
            model.indices.len(),
            summary.vertex_count
        );
    }

    Ok(model)
}

/// Every index must name an existing vertex
fn check_indices(indices: &[u16], vertex_count: usize) -> DecodeResult<()> {
    match indices
        .iter()
        .position(|&value| value as usize >= vertex_count)
    {
        Some(position) => Err(DecodeError::IndexOutOfRange {
            position,
            value: indices[position],
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Every range must name an existing material and existing faces
fn check_attribute_ranges(
    ranges: &[AttributeRange],
    triangle_count: usize,
    material_count: usize,
) -> DecodeResult<()> {
    for (index, range) in ranges.iter().enumerate() {
        if range.material_index as usize >= material_count
            || range.face_end() > triangle_count as u64
        {
            return Err(DecodeError::AttributeRangeOutOfBounds {
                index,
                material_index: range.material_index,
                face_start: range.face_start,
                face_end: range.face_end(),
                triangle_count,
                material_count,
            });
        }
    }
    Ok(())
}
