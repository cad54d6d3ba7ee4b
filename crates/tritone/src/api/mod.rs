//! Public API for the tritone crate.
//!
//! This module provides the high-level API: [`PosterPipeline`] builder and
//! [`PosterError`] unified error type.

mod builder;
mod error;

pub use builder::{PosterPipeline, DEFAULT_TARGET_HEIGHT};
pub use error::PosterError;
