//! PDF Triage Library
//!
//! Scans a directory tree for PDF files, validates each one in parallel,
//! deletes files that fail validation, and flags valid files whose names
//! contain an uppercase letter.

pub mod core;
pub mod pipeline;
pub mod scanner;

pub use crate::core::validator;
pub use crate::pipeline::orchestrator;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::naming::has_uppercase;
    pub use crate::core::validator::{validate_pdf, InvalidReason, Validity};
    pub use crate::pipeline::dispatcher::{run_tasks, Completion};
    pub use crate::pipeline::orchestrator::{run, PipelineConfig, RunSummary};
    pub use crate::scanner::file_scanner::{collect_files, sort_by_mtime_desc};
    pub use crate::scanner::remover::remove_file;
}
