//! SM0/SM1 binary model format
//!
//! POD records with explicit little-endian serialization. There is no magic;
//! the version comes from the file name (see [`version`]).
//!
//! All fixed-size records implement the [`BinarySerializable`] trait for
//! consistent serialization/deserialization.

pub mod header;
mod serialization;
pub mod texture_table;
pub mod version;
pub mod vertex;

pub use header::*;
pub use serialization::{BinarySerializable, read_array};
pub use texture_table::*;
pub use version::*;
pub use vertex::*;
