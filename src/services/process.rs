use std::path::{Path, PathBuf};

use crate::error::ProcessError;
use crate::models::PosterSettings;

/// Turn one image file into a poster and write it to `output_dir`.
///
/// Runs load → grayscale → posterize → palette map → pixelate → PNG encode,
/// then writes `<stem><suffix>.png` into `output_dir`, creating the directory
/// (and its parents) if needed. Returns the path written.
///
/// Every failure is returned, never panicked, so a caller processing many
/// files can report this one and carry on with the rest.
pub fn process_image(
    input: &Path,
    output_dir: &Path,
    settings: &PosterSettings,
) -> Result<PathBuf, ProcessError> {
    let output =
        settings
            .output_path(input, output_dir)
            .ok_or_else(|| ProcessError::NoFileStem {
                path: input.to_path_buf(),
            })?;

    let img = tritone::load_image(input).map_err(|source| ProcessError::Load {
        path: input.to_path_buf(),
        source,
    })?;

    let pipeline = settings.pipeline();
    let pipeline_error = |source| ProcessError::Pipeline {
        path: input.to_path_buf(),
        source,
    };
    let poster = pipeline.render(&img).map_err(pipeline_error)?;
    drop(img);
    let png_bytes = pipeline.encode(&poster).map_err(pipeline_error)?;

    std::fs::create_dir_all(output_dir).map_err(|source| ProcessError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&output, &png_bytes).map_err(|source| ProcessError::Write {
        path: output.clone(),
        source,
    })?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        width = poster.width(),
        height = poster.height(),
        bytes = png_bytes.len(),
        "Wrote poster"
    );

    Ok(output)
}
