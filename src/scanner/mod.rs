//! File discovery and removal

pub mod file_scanner;
pub mod remover;

pub use file_scanner::{collect_files, sort_by_mtime_desc};
pub use remover::remove_file;
