use std::path::{Path, PathBuf};

use tritone::PosterPipeline;

/// Validated, immutable settings shared by every file in a run.
///
/// Built once from [`AppConfig`](super::AppConfig) and passed by reference
/// into each `process_image` call.
#[derive(Debug, Clone)]
pub struct PosterSettings {
    pipeline: PosterPipeline,
    suffix: String,
}

impl PosterSettings {
    pub fn new(pipeline: PosterPipeline, suffix: impl Into<String>) -> Self {
        Self {
            pipeline,
            suffix: suffix.into(),
        }
    }

    /// The poster pipeline (palette, thresholds, target height, PNG options)
    pub fn pipeline(&self) -> &PosterPipeline {
        &self.pipeline
    }

    /// Suffix appended to each output file stem
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Output path for `input`: `<output_dir>/<stem><suffix>.png`.
    ///
    /// Returns `None` if `input` has no file stem (e.g. `/` or `..`).
    pub fn output_path(&self, input: &Path, output_dir: &Path) -> Option<PathBuf> {
        let stem = input.file_stem()?;
        let mut name = stem.to_os_string();
        name.push(&self.suffix);
        name.push(".png");
        Some(output_dir.join(name))
    }
}

impl Default for PosterSettings {
    fn default() -> Self {
        Self::new(PosterPipeline::default(), "_orange")
    }
}
