//! orange-poster - batch three-tone poster converter
//!
//! Turns photos into blocky black/brown/orange posters. The image work lives
//! in the `tritone` crate; this crate adds configuration, output naming and
//! batch processing, and exposes them for the CLI and integration tests.

pub mod error;
pub mod models;
pub mod services;
