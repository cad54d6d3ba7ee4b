//! Input images written into temporary directories.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use orange_poster::models::PosterSettings;
use tempfile::TempDir;

/// Scratch workspace with an `in/` directory for inputs and an `out/`
/// directory path (not created) for results.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join("in")).expect("Failed to create input dir");
        Self { dir }
    }

    pub fn input(&self, name: &str) -> PathBuf {
        self.dir.path().join("in").join(name)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write a uniform gray PNG
    pub fn gray_png(&self, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
        let path = self.input(name);
        GrayImage::from_pixel(width, height, Luma([value]))
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write gray PNG");
        path
    }

    /// Write a uniform colour JPEG
    pub fn rgb_jpeg(&self, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let path = self.input(name);
        RgbImage::from_pixel(width, height, Rgb(rgb))
            .save_with_format(&path, ImageFormat::Jpeg)
            .expect("Failed to write JPEG");
        path
    }

    /// Write an RGB PNG from a per-pixel function
    pub fn rgb_png_with<F>(&self, name: &str, width: u32, height: u32, f: F) -> PathBuf
    where
        F: Fn(u32, u32) -> [u8; 3],
    {
        let path = self.input(name);
        RgbImage::from_fn(width, height, |x, y| Rgb(f(x, y)))
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write PNG");
        path
    }

    /// Write a file with a `.png` name that is not an image
    pub fn corrupt_png(&self, name: &str) -> PathBuf {
        let path = self.input(name);
        std::fs::write(&path, b"definitely not a png").expect("Failed to write file");
        path
    }
}

/// Default settings with a different working height
pub fn settings_with_target_height(height: u32) -> PosterSettings {
    let pipeline = tritone::PosterPipeline::default().target_height(height);
    PosterSettings::new(pipeline, "_orange")
}

/// True if `path` exists and is a regular file
pub fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
