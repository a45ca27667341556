//! File scanning and collection

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Collect all files under `root` whose names end with the given
/// extension.
///
/// The extension comparison is a case-insensitive suffix match; a leading
/// dot in `extension` is tolerated. Returned paths are absolute. A root
/// that does not exist (or is not a directory) yields an empty vector.
/// Unreadable subtrees are skipped with a warning rather than aborting
/// the scan.
pub fn collect_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let suffix = format!(".{}", extension.trim_start_matches('.').to_lowercase());
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .ends_with(&suffix)
        {
            let path = entry.into_path();
            files.push(std::path::absolute(&path).unwrap_or(path));
        }
    }

    files
}

/// Sort files by modification time, most recently modified first.
///
/// Files whose mtime cannot be read sort last. Ties appear in arbitrary
/// relative order.
pub fn sort_by_mtime_desc(files: &mut [PathBuf]) {
    files.sort_by_cached_key(|path| {
        let mtime = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        Reverse(mtime)
    });
}
