//! sm-export library
//!
//! Converts decoded SM0/SM1 models to Wavefront OBJ/MTL. Used by the
//! `sm-export` binary and by integration tests.

pub mod convert;
pub mod export;
pub mod obj;

pub use convert::{
    BatchReport, ConvertOptions, ConvertOutcome, FileReport, convert_all, convert_file,
};
pub use export::{ExportedFiles, export_model};
pub use obj::{format_sci, write_mtl, write_obj};

// Re-export the decoder so callers need a single dependency
pub use sm_common::{DecodeConfig, SmModel, decode_bytes, decode_file};
