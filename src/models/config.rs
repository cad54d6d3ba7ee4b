use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tritone::{Palette, PngFormat, PngOptions, PosterPipeline, Thresholds};

use crate::error::ConfigError;
use crate::models::PosterSettings;

/// Application configuration loaded from a YAML file.
///
/// Every key is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory posters are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Appended to the input file stem to form the output name
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Working height for pixelation
    #[serde(default = "default_target_height")]
    pub target_height: u32,

    /// Shadow, midtone and highlight colours as hex strings
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Posterization bucket boundaries
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// PNG output options
    #[serde(default)]
    pub png: PngConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output_images")
}

fn default_suffix() -> String {
    "_orange".to_string()
}

fn default_target_height() -> u32 {
    tritone::DEFAULT_TARGET_HEIGHT
}

fn default_palette() -> Vec<String> {
    Palette::default().to_hex_strings()
}

/// Posterization thresholds as written in the config file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    #[serde(default = "default_low")]
    pub low: u8,

    #[serde(default = "default_high")]
    pub high: u8,
}

fn default_low() -> u8 {
    tritone::posterize::DEFAULT_LOW
}

fn default_high() -> u8 {
    tritone::posterize::DEFAULT_HIGH
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
        }
    }
}

/// PNG layout name used in the config file and on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Indexed,
    Rgb,
}

impl From<OutputFormat> for PngFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Indexed => PngFormat::Indexed,
            OutputFormat::Rgb => PngFormat::Rgb,
        }
    }
}

/// PNG output options as written in the config file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct PngConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Re-compress output with oxipng (slower, smaller files)
    #[serde(default)]
    pub optimize: bool,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize configuration as YAML text.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration and build the immutable pipeline settings.
    pub fn settings(&self) -> Result<PosterSettings, ConfigError> {
        if self.target_height == 0 {
            return Err(ConfigError::TargetHeight);
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Suffix(self.suffix.clone()));
        }

        let palette = Palette::from_hex(self.palette.as_slice())?;
        let thresholds = Thresholds::new(self.thresholds.low, self.thresholds.high)?;
        let pipeline = PosterPipeline::new(palette)
            .thresholds(thresholds)
            .target_height(self.target_height)
            .png_options(PngOptions {
                format: self.png.format.into(),
                optimize: self.png.optimize,
            });

        Ok(PosterSettings::new(pipeline, self.suffix.clone()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            suffix: default_suffix(),
            target_height: default_target_height(),
            palette: default_palette(),
            thresholds: ThresholdConfig::default(),
            png: PngConfig::default(),
        }
    }
}
