//! Per-file conversion and batch driver
//!
//! Each input is decoded and exported independently; a failure is logged
//! and recorded in the [`BatchReport`] without stopping the batch.

use anyhow::{Context, Result};
use sm_common::{DecodeConfig, ModelSummary, decode_file};
use std::path::{Path, PathBuf};

use crate::export::{ExportedFiles, export_model};

/// Conversion settings shared by every file in a batch
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub decode: DecodeConfig,
    /// Directory receiving the `.obj`/`.mtl` files
    pub output_dir: PathBuf,
    /// Decode only, write nothing
    pub inspect: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            decode: DecodeConfig::default(),
            output_dir: PathBuf::from("."),
            inspect: false,
        }
    }
}

/// What happened to a successfully processed file
#[derive(Debug)]
pub enum ConvertOutcome {
    Exported {
        summary: ModelSummary,
        files: ExportedFiles,
    },
    Inspected(ModelSummary),
}

impl ConvertOutcome {
    pub fn summary(&self) -> &ModelSummary {
        match self {
            ConvertOutcome::Exported { summary, .. } => summary,
            ConvertOutcome::Inspected(summary) => summary,
        }
    }
}

/// Decode one model and, unless inspecting, export it next to its siblings
/// in `options.output_dir` as `<file name>.obj` / `<file name>.mtl`
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConvertOutcome> {
    let model = decode_file(input, &options.decode)
        .with_context(|| format!("Failed to decode {}", input.display()))?;
    let summary = model.summary();

    if options.inspect {
        return Ok(ConvertOutcome::Inspected(summary));
    }

    let base_name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?
        .to_string_lossy();
    let files = export_model(&model, &options.output_dir, &base_name)?;

    Ok(ConvertOutcome::Exported { summary, files })
}

/// Result of one input in a batch
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub result: Result<ConvertOutcome>,
}

/// Results of [`convert_all`], in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}

/// Convert every input in order, isolating failures
pub fn convert_all<I, P>(inputs: I, options: &ConvertOptions) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();

    for input in inputs {
        let input = input.as_ref();
        tracing::info!("Processing {}", input.display());

        let result = convert_file(input, options);
        match &result {
            Ok(outcome) => {
                tracing::info!("{}: {}", input.display(), outcome.summary());
                if let ConvertOutcome::Exported { files, .. } = outcome {
                    tracing::info!(
                        "{} -> {}, {}",
                        input.display(),
                        files.obj.display(),
                        files.mtl.display()
                    );
                }
            }
            Err(e) => tracing::error!("{:#}", e),
        }

        report.files.push(FileReport {
            input: input.to_path_buf(),
            result,
        });
    }

    report
}
