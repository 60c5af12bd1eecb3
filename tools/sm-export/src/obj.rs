//! Wavefront OBJ/MTL writer
//!
//! Floats are written in C's `%.8e` notation. Faces reference vertex/UV
//! pairs with 1-based indices, with winding reversed to undo the Z flip
//! applied on decode.

use anyhow::{Context, Result};
use sm_common::SmModel;
use std::io::Write;

/// Format a float like C's `printf("%.8e")`, e.g. `-1.25000000e+02`
pub fn format_sci(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let s = format!("{:.8e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

/// Write the OBJ geometry for `model`, referencing the material library `mtl_name`
pub fn write_obj<W: Write>(w: &mut W, model: &SmModel, mtl_name: &str) -> Result<()> {
    writeln!(w, "mtllib {}", mtl_name)?;

    tracing::info!("Writing {} vertices...", model.vertices.len());
    for v in &model.vertices {
        writeln!(
            w,
            "v {} {} {}",
            format_sci(v.x),
            format_sci(v.y),
            format_sci(v.z)
        )?;
    }

    tracing::info!("Writing {} UVs...", model.uvs.len());
    for uv in &model.uvs {
        writeln!(w, "vt {} {}", format_sci(uv.x), format_sci(uv.y))?;
    }

    for (i, range) in model.attribute_ranges.iter().enumerate() {
        let name = model
            .material_name(range)
            .with_context(|| format!("Attribute range {} has no material", i))?;
        tracing::info!(
            "Writing {} faces with texture {}...",
            range.face_count,
            name
        );
        writeln!(w, "usemtl {}", name)?;

        for face in range.faces() {
            let [a, b, c] = model
                .triangle(face)
                .with_context(|| format!("Attribute range {} references missing face {}", i, face))?;
            // Reversed winding, 1-based
            let (a, b, c) = (a as u32 + 1, b as u32 + 1, c as u32 + 1);
            writeln!(w, "f {}/{} {}/{} {}/{}", c, c, b, b, a, a)?;
        }
    }

    Ok(())
}

/// Write one material per attribute range, using the texture name as diffuse map
pub fn write_mtl<W: Write>(w: &mut W, model: &SmModel) -> Result<()> {
    for (i, range) in model.attribute_ranges.iter().enumerate() {
        let name = model
            .material_name(range)
            .with_context(|| format!("Attribute range {} has no material", i))?;
        tracing::debug!("Writing material for texture {}...", name);
        writeln!(w, "newmtl {}", name)?;
        writeln!(w, "map_Kd {}", name)?;
    }
    Ok(())
}
