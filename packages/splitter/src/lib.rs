//! WXR Split - Split WordPress XML export files into smaller chunks.
//!
//! WordPress exports a whole site as one WXR document (an RSS dialect).
//! Downstream importers such as Ghost enforce per-import size limits, so
//! this crate partitions the export's `<item>` records into multiple
//! standalone documents that each keep the original channel metadata and
//! namespace declarations, optionally filtered by post type and bundled
//! into a zip archive.
//!
//! # Example
//!
//! ```
//! use wxr_split::analyze;
//!
//! let xml = r#"<rss xmlns:wp="http://wordpress.org/export/1.2/">
//!     <channel><item><wp:post_type>post</wp:post_type></item></channel>
//! </rss>"#;
//!
//! let counts = analyze(xml);
//! assert_eq!(counts.total, 1);
//! assert_eq!(counts.posts, 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: constants, validation and naming helpers
//! - [`types`]: core data types (`ItemKind`, `ItemCounts`)
//! - [`error`]: error types and Result alias
//! - [`xml`]: DOM navigation utilities
//! - [`analyze`]: export analysis and item classification
//! - [`split`]: the chunk partitioner
//! - [`archive`]: zip bundling of chunk files
//! - [`cli`]: command-line interface

pub mod analyze;
pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod split;
pub mod types;
pub mod xml;

// Re-export main operations
pub use analyze::analyze;
pub use archive::archive_chunks;
pub use split::split_export;

// Re-export commonly used items
pub use config::{clamp_chunk_size, has_xml_extension};
pub use error::{Result, SplitError};
pub use types::{ItemCounts, ItemKind};
