use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;
use crate::models::PosterSettings;
use crate::services::process_image;

/// Result of processing one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<PathBuf, ProcessError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Output paths of the files that were written.
    pub fn succeeded(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(out) => Some((o.input.as_path(), out.as_path())),
            Err(_) => None,
        })
    }

    /// Inputs that failed, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (&Path, &ProcessError)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(_) => None,
            Err(e) => Some((o.input.as_path(), e)),
        })
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// True if every file was written.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(FileOutcome::is_success)
    }
}

/// Processes a list of files one after another.
///
/// A failing file is logged and recorded in the [`BatchReport`]; it never
/// stops the files after it.
pub struct BatchProcessor {
    settings: PosterSettings,
}

impl BatchProcessor {
    pub fn new(settings: PosterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PosterSettings {
        &self.settings
    }

    /// Process every input into `output_dir`.
    ///
    /// Repeated paths are processed once, at their first position.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NoInputs`] if `inputs` is empty. Per-file
    /// failures are reported inside the [`BatchReport`] instead.
    pub fn run(&self, inputs: &[PathBuf], output_dir: &Path) -> Result<BatchReport, ProcessError> {
        if inputs.is_empty() {
            return Err(ProcessError::NoInputs);
        }

        let inputs = dedup_inputs(inputs);
        tracing::info!(
            files = inputs.len(),
            output_dir = %output_dir.display(),
            "Processing images"
        );

        let mut report = BatchReport::default();
        for input in inputs {
            let result = process_image(input, output_dir, &self.settings);
            match &result {
                Ok(output) => tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    "Processed image"
                ),
                Err(e) => tracing::warn!(input = %input.display(), %e, "Failed to process image"),
            }
            report.outcomes.push(FileOutcome {
                input: input.to_path_buf(),
                result,
            });
        }

        tracing::info!(
            succeeded = report.success_count(),
            failed = report.failure_count(),
            "Batch finished"
        );
        Ok(report)
    }
}

/// Drop repeated paths, keeping first-occurrence order.
fn dedup_inputs(inputs: &[PathBuf]) -> Vec<&Path> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .map(PathBuf::as_path)
        .filter(|p| seen.insert(*p))
        .collect()
}
