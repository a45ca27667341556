use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pdf_triage::prelude::*;

#[derive(Parser)]
#[command(name = "pdf_triage")]
#[command(about = "Validates PDF files in parallel, deletes corrupt ones, and flags uppercase-named files", long_about = None)]
struct Cli {
    /// Directory to scan for PDF files
    #[arg(default_value = "./PDFs")]
    directory: PathBuf,

    /// File extension to match (case-insensitive)
    #[arg(short, long, default_value = "pdf")]
    extension: String,

    /// Maximum number of concurrent validations
    #[arg(short, long, default_value_t = 100)]
    pool_size: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("PDF Triage");
    println!(
        "Scanning {} for .{} files (up to {} concurrent validations)",
        cli.directory.display(),
        cli.extension.trim_start_matches('.'),
        cli.pool_size
    );
    println!();

    let config = PipelineConfig {
        root: cli.directory,
        extension: cli.extension,
        pool_size: cli.pool_size,
    };

    let summary = run(&config)?;

    if summary.files_found > 0 {
        println!();
        println!("==================================================");
        println!("RUN COMPLETE");
        println!("==================================================");
        println!("Files scanned: {}", summary.files_found);
        println!("Invalid files deleted: {}", summary.deleted);
        if summary.delete_failures > 0 {
            println!("Invalid files left in place: {}", summary.delete_failures);
        }
        if summary.task_failures > 0 {
            println!("Files skipped after task failure: {}", summary.task_failures);
        }
        println!("Uppercase-named matches: {}", summary.matches.len());
    }

    Ok(())
}
