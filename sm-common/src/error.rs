//! Decoder error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding an SM0/SM1 model
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file name does not end in `0` or `1`
    #[error("cannot determine SM version from file name: {}", .path.display())]
    UnknownVersion { path: PathBuf },

    /// Open or read failure (includes file not found)
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File ends before a section declared by the header
    #[error("file truncated: {section} needs {needed} bytes at offset {offset}, {available} available")]
    TruncatedFile {
        section: &'static str,
        offset: usize,
        needed: u64,
        available: usize,
    },

    /// Header scale contains NaN or infinity
    #[error("header scale is not finite: [{x}, {y}, {z}]")]
    NonFiniteScale { x: f32, y: f32, z: f32 },

    /// Texture name length prefix exceeds the 50 byte payload
    #[error("texture name {index} has length {len} (max {max})")]
    MalformedTextureName { index: usize, len: u8, max: usize },

    /// zlib stream is corrupt
    #[error("failed to decompress {stream}: {source}")]
    DecompressionFailed {
        stream: &'static str,
        #[source]
        source: io::Error,
    },

    /// Inflated stream exceeds the configured ceiling
    #[error("decompressed {stream} exceeds {limit} bytes")]
    DecompressedTooLarge { stream: &'static str, limit: usize },

    /// Index buffer does not hold a whole number of u16 triangles
    #[error("index buffer is {len} bytes, not a multiple of 6")]
    MisalignedIndexBuffer { len: usize },

    /// Index refers past the end of the vertex array
    #[error("index {position} has value {value}, but there are only {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        value: u16,
        vertex_count: usize,
    },

    /// Attribute range refers to faces or a material that do not exist
    #[error(
        "attribute range {index} (material {material_index}, faces {face_start}..{face_end}) \
         is out of bounds ({triangle_count} triangles, {material_count} materials)"
    )]
    AttributeRangeOutOfBounds {
        index: usize,
        material_index: u32,
        face_start: u32,
        face_end: u64,
        triangle_count: usize,
        material_count: usize,
    },
}

/// Decoder result type
pub type DecodeResult<T> = Result<T, DecodeError>;
