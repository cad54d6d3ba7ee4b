pub mod batch;
pub mod process;

pub use batch::{BatchProcessor, BatchReport, FileOutcome};
pub use process::process_image;
