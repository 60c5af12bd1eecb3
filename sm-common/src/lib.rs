//! SM0/SM1 model format support
//!
//! This crate decodes the compressed binary models used by Stickman Warfare
//! (`.sm0` and `.sm1`) into plain geometry. It is shared by:
//! - `sm-export` (OBJ/MTL exporter and command-line tool)
//!
//! # Modules
//!
//! - [`formats`] - On-disk records (header, texture table, packed vertices)
//! - [`packing`] - Fixed point -> float unpacking
//! - [`decoder`] - File/bytes -> [`SmModel`]

pub mod decoder;
pub mod error;
pub mod formats;
pub mod inflate;
pub mod model;
pub mod packing;

pub use glam;

// Re-export the decoder entry points
pub use decoder::{DecodeConfig, decode_bytes, decode_file};
pub use error::{DecodeError, DecodeResult};
pub use model::{ModelSummary, SmModel};

// Re-export commonly used format items
pub use formats::{
    AttributeRange, PackedVertex, PackedVertexCurrent, PackedVertexLegacy, SmHeader, SmVersion,
    TEXTURE_NAME_MAX_LEN, TextureNameRecord,
};
pub use inflate::DEFAULT_MAX_DECOMPRESSED_SIZE;
pub use packing::{UV_SCALE_U, UV_SCALE_V, unpack_position, unpack_unorm16, unpack_uv};
