//! Command-line interface for the splitter.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analyze::analyze;
use crate::archive::archive_chunks;
use crate::config::{
    default_output_dir, run_timestamp, ADVISORY_CHUNK_SIZE, DEFAULT_CHUNK_SIZE,
    LARGE_EXPORT_THRESHOLD,
};
use crate::error::{Result, SplitError};
use crate::split::split_export;
use crate::types::ItemCounts;

/// Split WordPress XML export files into smaller chunks for Ghost import.
#[derive(Parser)]
#[command(name = "wxr-split")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the WordPress XML export file
    pub xml_file: PathBuf,

    /// Directory to save split files (default: wp_split_<timestamp>)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of items per chunk
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Post types to include (e.g. post page attachment)
    #[arg(short = 't', long, num_args = 1..)]
    pub post_types: Vec<String>,

    /// Create a zip archive of the split files
    #[arg(short, long)]
    pub zip: bool,

    /// Only analyze the export without splitting
    #[arg(short, long)]
    pub analyze: bool,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    if !cli.xml_file.is_file() {
        return Err(SplitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", cli.xml_file.display()),
        )));
    }

    let xml = fs::read_to_string(&cli.xml_file)?;
    let counts = analyze(&xml);

    print_analysis(&cli.xml_file, &counts);

    if cli.analyze {
        return Ok(());
    }

    if counts.total > LARGE_EXPORT_THRESHOLD && cli.chunk_size > ADVISORY_CHUNK_SIZE {
        println!();
        println!(
            "{} Your file has {} items. For Ghost import, a smaller chunk size is recommended.",
            style("Warning:").yellow().bold(),
            counts.total
        );
        println!("Consider using --chunk-size {ADVISORY_CHUNK_SIZE} for better results.");
    }

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&run_timestamp()));

    println!();
    println!(
        "{} into chunks of {} items...",
        style("Splitting").bold(),
        style(cli.chunk_size).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Writing chunk files...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let files = match split_export(&xml, &output_dir, cli.chunk_size, &cli.post_types) {
        Ok(files) => files,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "{} {} chunks in {}",
        style("Created").green().bold(),
        files.len(),
        output_dir.display()
    );
    for file in &files {
        println!("  {}", file.display());
    }

    if cli.zip {
        let archive = archive_chunks(&files, None)?;
        println!();
        println!(
            "{} {}",
            style("Created zip archive:").green().bold(),
            archive.display()
        );
    }

    println!();
    println!("{}", style("Done!").green().bold());
    Ok(())
}

/// Print the fixed analysis summary.
fn print_analysis(path: &std::path::Path, counts: &ItemCounts) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!();
    println!("Analysis of {}:", style(name).cyan());
    println!("Total items: {}", counts.total);
    println!("Posts: {}", counts.posts);
    println!("Pages: {}", counts.pages);
    println!("Attachments: {}", counts.attachments);
    println!("Other items: {}", counts.other);
}
