//! Binary serialization trait for fixed-size records.
//!
//! The header and both texture table records implement
//! `BinarySerializable`, which lets the decoder read any of them (or a
//! contiguous array of them) through one code path. Each type keeps its own
//! `to_bytes()` returning a fixed-size array.

/// Trait for fixed-size binary records.
///
/// The decoder only needs `deserialize` (through [`read_array`] and the
/// section reader). `serialize` returns an owned buffer and is used to build
/// fixtures.
///
/// # Example
///
/// ```
/// use sm_common::formats::{AttributeRange, BinarySerializable};
///
/// let range = AttributeRange { face_count: 4, ..Default::default() };
/// let bytes = range.serialize();
/// assert_eq!(AttributeRange::deserialize(&bytes), Some(range));
/// ```
pub trait BinarySerializable: Sized {
    /// Size of the serialized record in bytes.
    const SIZE: usize;

    /// Serialize to bytes.
    fn serialize(&self) -> Vec<u8>;

    /// Deserialize from bytes.
    ///
    /// Returns `None` if the byte slice is too short.
    fn deserialize(bytes: &[u8]) -> Option<Self>;
}

/// Read `count` consecutive records starting at the front of `bytes`.
///
/// Returns `None` if `bytes` cannot hold them all.
pub fn read_array<T: BinarySerializable>(bytes: &[u8], count: usize) -> Option<Vec<T>> {
    let total = count.checked_mul(T::SIZE)?;
    let bytes = bytes.get(..total)?;
    bytes.chunks_exact(T::SIZE).map(T::deserialize).collect()
}

impl BinarySerializable for super::SmHeader {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}

impl BinarySerializable for super::TextureNameRecord {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}

impl BinarySerializable for super::AttributeRange {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}
