//! End-to-end pipeline: walk, sort, validate in parallel, delete, match

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::core::naming::has_uppercase;
use crate::core::validator::{validate_pdf, InvalidReason, Validity};
use crate::pipeline::dispatcher::{run_tasks, Completion};
use crate::scanner::file_scanner::{collect_files, sort_by_mtime_desc};
use crate::scanner::remover::remove_file;

/// Pipeline configuration: scan root, extension filter, and the upper
/// bound on concurrent validations.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub root: PathBuf,
    pub extension: String,
    pub pool_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./PDFs"),
            extension: "pdf".to_string(),
            pool_size: 100,
        }
    }
}

/// Final tally of a run. `matches` is in completion order, which is
/// non-deterministic across runs.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_found: usize,
    pub deleted: usize,
    pub delete_failures: usize,
    pub task_failures: usize,
    pub matches: Vec<PathBuf>,
}

/// What a single per-file task produced.
#[derive(Debug)]
enum FileOutcome {
    /// Valid file whose name contains an uppercase letter.
    Match(PathBuf),
    /// Valid file, name did not match.
    Valid,
    /// Invalid file, deleted.
    Removed { path: PathBuf, reason: InvalidReason },
    /// Invalid file that could not be deleted.
    RemoveFailed {
        path: PathBuf,
        reason: InvalidReason,
        error: String,
    },
}

/// Validate one file, deleting it if invalid, and report whether its name
/// matches. Runs inside a worker; it performs the deletion side effect but
/// leaves all printing to the collecting thread.
fn process_file(path: &PathBuf) -> FileOutcome {
    match validate_pdf(path) {
        Validity::Valid { .. } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if has_uppercase(&name) {
                FileOutcome::Match(path.clone())
            } else {
                FileOutcome::Valid
            }
        }
        Validity::Invalid(reason) => match remove_file(path) {
            Ok(()) => FileOutcome::Removed {
                path: path.clone(),
                reason,
            },
            Err(e) => FileOutcome::RemoveFailed {
                path: path.clone(),
                reason,
                error: e.to_string(),
            },
        },
    }
}

/// Run the whole pipeline: discover files, sort newest-first, validate in
/// parallel on a bounded pool, delete invalid files, and collect valid
/// files with uppercase names.
///
/// Matches are printed as they complete; the run always ends with a final
/// status line. File-level failures are logged and skipped, never
/// escalated.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let mut files = collect_files(&config.root, &config.extension);

    if files.is_empty() {
        println!(
            "No .{} files found in {}.",
            config.extension.trim_start_matches('.'),
            config.root.display()
        );
        return Ok(RunSummary::default());
    }

    sort_by_mtime_desc(&mut files);

    let mut summary = RunSummary {
        files_found: files.len(),
        ..RunSummary::default()
    };

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    run_tasks(files, config.pool_size, process_file, |completion| {
        progress.inc(1);
        match completion {
            Completion::Done(FileOutcome::Match(path)) => {
                progress.println(format!("Uppercase filename found: {}", path.display()));
                summary.matches.push(path);
            }
            Completion::Done(FileOutcome::Valid) => {}
            Completion::Done(FileOutcome::Removed { path, reason }) => {
                progress.println(format!(
                    "Deleted invalid file ({}): {}",
                    reason,
                    path.display()
                ));
                summary.deleted += 1;
            }
            Completion::Done(FileOutcome::RemoveFailed {
                path,
                reason,
                error,
            }) => {
                progress.println(format!(
                    "Warning: invalid file ({}) could not be deleted: {}: {}",
                    reason,
                    path.display(),
                    error
                ));
                summary.delete_failures += 1;
            }
            Completion::Panicked(path) => {
                progress.println(format!(
                    "Warning: validation task for {} failed unexpectedly; skipping",
                    path.display()
                ));
                summary.task_failures += 1;
            }
        }
    })?;

    progress.finish_and_clear();

    if summary.matches.is_empty() {
        println!("No files with uppercase letters in their names were found.");
    } else {
        println!();
        println!("All files with uppercase letters in their names:");
        for path in &summary.matches {
            println!("{}", path.display());
        }
    }

    Ok(summary)
}
