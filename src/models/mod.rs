pub mod config;
pub mod settings;

pub use config::{AppConfig, OutputFormat, PngConfig, ThresholdConfig};
pub use settings::PosterSettings;
