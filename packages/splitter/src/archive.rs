//! Zip archiving of chunk documents for single-file delivery.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::config::{archive_file_name, run_timestamp};
use crate::error::{Result, SplitError};

/// Bundle chunk files into one timestamped zip archive.
///
/// Each file is stored under its base name, with no directory structure
/// inside the archive. `output_dir` defaults to the directory of the first
/// file. An empty `files` list is an error ([`SplitError::NothingToArchive`]),
/// distinct from a write failure during archive creation.
///
/// Returns the path of the created archive.
pub fn archive_chunks(files: &[PathBuf], output_dir: Option<&Path>) -> Result<PathBuf> {
    let first = files.first().ok_or(SplitError::NothingToArchive)?;

    let dir = match output_dir {
        Some(dir) => dir,
        None => first.parent().unwrap_or_else(|| Path::new(".")),
    };
    let archive_path = dir.join(archive_file_name(&run_timestamp()));

    let mut writer = ZipWriter::new(File::create(&archive_path)?);
    let options = SimpleFileOptions::default();

    for file in files {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                SplitError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("File has no usable base name: {}", file.display()),
                ))
            })?;
        writer.start_file(name, options)?;
        writer.write_all(&std::fs::read(file)?)?;
    }

    writer.finish()?;
    tracing::info!(files = files.len(), path = %archive_path.display(), "created archive");

    Ok(archive_path)
}
