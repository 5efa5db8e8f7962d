//! Error types for the splitter.
//!
//! Structural problems with the export document get their own variants so
//! callers can tell "nothing to do" apart from real I/O failures.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The export document has no `<channel>` element.
    #[error("Invalid WordPress export file (no channel element found)")]
    NoChannel,

    /// The channel contains no `<item>` elements.
    #[error("No items found in WordPress export file")]
    NoItems,

    /// Post-type filtering removed every item.
    #[error("No items left to split after filtering by post types: {}", .types.join(", "))]
    NoMatchingItems { types: Vec<String> },

    /// Chunk size must be a positive integer.
    #[error("Chunk size must be at least 1, got {0}")]
    InvalidChunkSize(usize),

    /// Archiving was requested for an empty file list.
    #[error("No files to archive")]
    NothingToArchive,

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Failed to write a chunk document.
    #[error("Failed to write chunk {path}: {source}")]
    ChunkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Zip archive creation failed.
    #[error("Failed to create zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_items_display() {
        let err = SplitError::NoMatchingItems {
            types: vec!["post".to_string(), "page".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No items left to split after filtering by post types: post, page"
        );
    }

    #[test]
    fn test_invalid_chunk_size_display() {
        let err = SplitError::InvalidChunkSize(0);
        assert!(err.to_string().contains("at least 1"));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_chunk_write_has_path_context() {
        let err = SplitError::ChunkWrite {
            path: PathBuf::from("/tmp/out/chunk_1_of_2.xml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("chunk_1_of_2.xml"));
    }
}
