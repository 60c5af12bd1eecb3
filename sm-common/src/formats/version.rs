//! Format version detection
//!
//! The files carry no magic or version field. The version is the last
//! character of the file name: `model.sm0` is SM0, `model.sm1` is SM1.

use std::fmt;
use std::path::Path;

use super::vertex::{PackedVertex, PackedVertexCurrent, PackedVertexLegacy};

/// SM model format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmVersion {
    /// SM0: 12-byte packed vertices with u8 light-map coordinates
    Legacy,
    /// SM1: 16-byte packed vertices
    Current,
}

impl SmVersion {
    /// Map a file name suffix character to a version
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Legacy),
            '1' => Some(Self::Current),
            _ => None,
        }
    }

    /// Detect the version from the final character of the file name
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        Self::from_suffix(name.chars().last()?)
    }

    /// Size of one packed vertex record in bytes
    pub const fn record_size(self) -> usize {
        match self {
            Self::Legacy => PackedVertexLegacy::SIZE,
            Self::Current => PackedVertexCurrent::SIZE,
        }
    }
}

impl fmt::Display for SmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmVersion::Legacy => write!(f, "SM0"),
            SmVersion::Current => write!(f, "SM1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_path() {
        assert_eq!(
            SmVersion::from_path(Path::new("models/tank.sm0")),
            Some(SmVersion::Legacy)
        );
        assert_eq!(
            SmVersion::from_path(Path::new("tank.sm1")),
            Some(SmVersion::Current)
        );
        // Only the last character counts
        assert_eq!(
            SmVersion::from_path(Path::new("level10")),
            Some(SmVersion::Legacy)
        );
        assert_eq!(SmVersion::from_path(Path::new("tank.sm2")), None);
        assert_eq!(SmVersion::from_path(Path::new("tank.obj")), None);
        assert_eq!(SmVersion::from_path(Path::new("")), None);
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(SmVersion::Legacy.record_size(), 12);
        assert_eq!(SmVersion::Current.record_size(), 16);
    }

    #[test]
    fn test_display() {
        assert_eq!(SmVersion::Legacy.to_string(), "SM0");
        assert_eq!(SmVersion::Current.to_string(), "SM1");
    }
}
