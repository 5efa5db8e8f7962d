//! Configuration constants and validation helpers for the splitter.

use std::path::{Path, PathBuf};

/// Default number of items per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Smallest chunk size interactive callers may request.
pub const MIN_CHUNK_SIZE: usize = 10;

/// Largest chunk size interactive callers may request.
pub const MAX_CHUNK_SIZE: usize = 500;

/// Item count above which a smaller chunk size is recommended.
///
/// Ghost imports get slow and flaky with large files; exports above this
/// size get a non-fatal advisory when the requested chunk size exceeds
/// [`ADVISORY_CHUNK_SIZE`].
pub const LARGE_EXPORT_THRESHOLD: usize = 500;

/// Chunk size suggested in the large-export advisory.
pub const ADVISORY_CHUNK_SIZE: usize = 50;

/// Maximum upload size in bytes for the interactive workflow (500 MB).
pub const MAX_UPLOAD_SIZE: usize = 500 * 1024 * 1024;

/// Clamp an interactive chunk-size request to [`MIN_CHUNK_SIZE`, `MAX_CHUNK_SIZE`].
///
/// The core splitter accepts any positive chunk size; this bound exists for
/// interactive use where an out-of-range value is almost certainly a typo.
///
/// # Examples
/// ```
/// use wxr_split::config::clamp_chunk_size;
///
/// assert_eq!(clamp_chunk_size(100), 100);
/// assert_eq!(clamp_chunk_size(3), 10);
/// assert_eq!(clamp_chunk_size(9999), 500);
/// ```
#[must_use]
pub fn clamp_chunk_size(requested: usize) -> usize {
    requested.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
}

/// Check whether a file name carries an `.xml` extension (case-insensitive).
///
/// # Examples
/// ```
/// use wxr_split::config::has_xml_extension;
///
/// assert!(has_xml_extension("export.xml"));
/// assert!(has_xml_extension("EXPORT.XML"));
/// assert!(!has_xml_extension("export.zip"));
/// assert!(!has_xml_extension("xml"));
/// ```
#[must_use]
pub fn has_xml_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.len() > ".xml".len() && lower.ends_with(".xml")
}

/// Build the deterministic chunk file name for chunk `index` of `total`.
///
/// `index` is 1-based so the name reads as "chunk 1 of 3".
///
/// # Examples
/// ```
/// use wxr_split::config::chunk_file_name;
///
/// assert_eq!(chunk_file_name(1, 3), "wordpress_export_chunk_1_of_3.xml");
/// ```
#[must_use]
pub fn chunk_file_name(index: usize, total: usize) -> String {
    format!("wordpress_export_chunk_{index}_of_{total}.xml")
}

/// Build the archive file name for a run timestamp.
#[must_use]
pub fn archive_file_name(timestamp: &str) -> String {
    format!("wordpress_export_chunks_{timestamp}.zip")
}

/// Default output directory for a run timestamp, relative to the working dir.
#[must_use]
pub fn default_output_dir(timestamp: &str) -> PathBuf {
    Path::new(&format!("wp_split_{timestamp}")).to_path_buf()
}

/// Timestamp used in run-scoped directory and archive names.
#[must_use]
pub fn run_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
