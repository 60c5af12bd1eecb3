//! Writes a decoded model as `<base>.obj` + `<base>.mtl`
//!
//! Both files are written to temporaries in the output directory and only
//! renamed into place once complete, so neither is ever left truncated. The
//! `.mtl` is renamed first: a new `.obj` only appears once the material
//! library it references is in place.

use anyhow::{Context, Result};
use sm_common::SmModel;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::obj::{write_mtl, write_obj};

/// Paths of the files produced by [`export_model`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub obj: PathBuf,
    pub mtl: PathBuf,
}

/// Export `model` to `out_dir/<base_name>.obj` and `out_dir/<base_name>.mtl`
///
/// Existing files are replaced. The `.obj` references the `.mtl` by file name.
pub fn export_model(model: &SmModel, out_dir: &Path, base_name: &str) -> Result<ExportedFiles> {
    let obj_name = format!("{}.obj", base_name);
    let mtl_name = format!("{}.mtl", base_name);
    let obj_path = out_dir.join(&obj_name);
    let mtl_path = out_dir.join(&mtl_name);

    let obj_tmp = write_temp(out_dir, |w| write_obj(w, model, &mtl_name))
        .with_context(|| format!("Failed to write {}", obj_path.display()))?;
    let mtl_tmp = write_temp(out_dir, |w| write_mtl(w, model))
        .with_context(|| format!("Failed to write {}", mtl_path.display()))?;

    mtl_tmp
        .persist(&mtl_path)
        .with_context(|| format!("Failed to create {}", mtl_path.display()))?;
    obj_tmp
        .persist(&obj_path)
        .with_context(|| format!("Failed to create {}", obj_path.display()))?;

    tracing::debug!("Wrote {} and {}", obj_path.display(), mtl_path.display());

    Ok(ExportedFiles {
        obj: obj_path,
        mtl: mtl_path,
    })
}

fn write_temp<F>(dir: &Path, write: F) -> Result<NamedTempFile>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<()>,
{
    let mut builder = tempfile::Builder::new();
    builder.prefix(".sm-export-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let tmp = builder.tempfile_in(dir)?;

    let mut writer = BufWriter::new(tmp.as_file());
    write(&mut writer)?;
    writer.flush()?;
    drop(writer);

    Ok(tmp)
}
