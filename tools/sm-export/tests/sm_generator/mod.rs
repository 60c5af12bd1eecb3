//! Programmatic SM0/SM1 generation for integration tests.
//!
//! Builds complete model files: header, texture table, and the two
//! zlib-compressed streams.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use sm_common::glam::Vec3;
use sm_common::{AttributeRange, SmHeader, SmVersion, TextureNameRecord};
use std::io::Write;
use std::path::Path;

fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// In-memory description of a model file
pub struct SmFile {
    pub version: SmVersion,
    pub scale: Vec3,
    /// (name, first face, face count)
    pub textures: Vec<(String, u32, u32)>,
    pub indices: Vec<u16>,
    /// Raw (position, uv) values
    pub vertices: Vec<([u16; 3], [u16; 2])>,
}

impl SmFile {
    pub fn to_bytes(&self) -> Vec<u8> {
        let index_bytes: Vec<u8> = self.indices.iter().flat_map(|i| i.to_le_bytes()).collect();

        let record_size = self.version.record_size();
        let mut vertex_bytes = Vec::new();
        for (position, uv) in &self.vertices {
            let start = vertex_bytes.len();
            for v in position.iter().chain(uv) {
                vertex_bytes.extend_from_slice(&v.to_le_bytes());
            }
            vertex_bytes.resize(start + record_size, 0);
        }

        let index_stream = compress(&index_bytes);
        let vertex_stream = compress(&vertex_bytes);

        let mut header = SmHeader::new(
            self.textures.len() as u32,
            index_stream.len() as u32,
            vertex_stream.len() as u32,
            self.scale,
        );
        header.indices_len = self.indices.len() as u32;
        header.vln = self.vertices.len() as u32;

        let mut out = header.to_bytes().to_vec();
        for (name, _, _) in &self.textures {
            out.extend_from_slice(&TextureNameRecord::new(name).unwrap().to_bytes());
        }
        for (i, (_, face_start, face_count)) in self.textures.iter().enumerate() {
            let range = AttributeRange {
                material_index: i as u32,
                face_start: *face_start,
                face_count: *face_count,
                vertex_start: 0,
                vertex_count: self.vertices.len() as u32,
            };
            out.extend_from_slice(&range.to_bytes());
        }
        out.extend_from_slice(&index_stream);
        out.extend_from_slice(&vertex_stream);
        out
    }

    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_bytes())
    }
}

/// One texture, one triangle, one centred legacy record at unit scale
pub fn minimal_legacy() -> SmFile {
    SmFile {
        version: SmVersion::Legacy,
        scale: Vec3::ONE,
        textures: vec![("tex".to_string(), 0, 1)],
        indices: vec![0, 1, 2],
        vertices: vec![([32768, 32768, 32768], [32768, 32768])],
    }
}

/// Two materials over a quad, current layout
pub fn textured_quad() -> SmFile {
    SmFile {
        version: SmVersion::Current,
        scale: Vec3::new(2.0, 2.0, 2.0),
        textures: vec![("front.bmp".to_string(), 0, 1), ("back.bmp".to_string(), 1, 1)],
        indices: vec![0, 1, 2, 2, 1, 3],
        vertices: vec![
            ([0, 0, 32768], [0, 0]),
            ([65535, 0, 32768], [65535, 0]),
            ([0, 65535, 32768], [0, 65535]),
            ([65535, 65535, 32768], [65535, 65535]),
        ],
    }
}
