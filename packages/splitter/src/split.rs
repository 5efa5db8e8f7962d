//! Split engine that partitions export items into fixed-size chunk documents.
//!
//! Chunk documents are built by splicing the source text around the byte
//! ranges of the items (roxmltree keeps node positions in the original
//! input). Everything outside the `<item>` elements, including the channel
//! metadata and the namespace declarations on the root, is copied byte for
//! byte, and every chunk owns its text independently of the source and of
//! other chunks.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use roxmltree::Document;

use crate::config::chunk_file_name;
use crate::error::{Result, SplitError};
use crate::xml::{find_child, find_children, item_post_type};

/// Declaration prepended when the source document does not carry its own.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Split a WordPress export into chunk documents of at most `chunk_size` items.
///
/// When `post_types` is non-empty, only items whose `wp:post_type` matches
/// one of the given values are retained (in document order) before chunking.
/// `output_dir` is created if absent; chunk files are named
/// `wordpress_export_chunk_{i}_of_{n}.xml` with 1-based indices.
///
/// `chunk_size` may be any positive integer. Interactive callers are
/// expected to clamp it with [`crate::config::clamp_chunk_size`] first; the
/// engine itself imposes no upper bound.
///
/// Returns the chunk file paths in chunk order. Structural problems (no
/// channel, no items, nothing left after filtering) and write failures all
/// surface as errors, never as a partial list presented as success.
pub fn split_export(
    xml: &str,
    output_dir: &Path,
    chunk_size: usize,
    post_types: &[String],
) -> Result<Vec<PathBuf>> {
    if chunk_size == 0 {
        return Err(SplitError::InvalidChunkSize(0));
    }

    let doc = Document::parse(xml)?;
    let channel = find_child(doc.root_element(), "channel").ok_or(SplitError::NoChannel)?;

    let items: Vec<_> = find_children(channel, "item").collect();
    if items.is_empty() {
        return Err(SplitError::NoItems);
    }

    // Byte ranges of every item in document order; chunks are spliced from
    // the source text around these.
    let item_ranges: Vec<Range<usize>> = items.iter().map(|item| item.range()).collect();

    // Indices (into document order) of items surviving the filter.
    let kept: Vec<usize> = if post_types.is_empty() {
        (0..items.len()).collect()
    } else {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item_post_type(**item).is_some_and(|t| post_types.iter().any(|p| *p == t))
            })
            .map(|(idx, _)| idx)
            .collect()
    };

    if kept.is_empty() {
        return Err(SplitError::NoMatchingItems {
            types: post_types.to_vec(),
        });
    }

    let chunk_count = kept.len().div_ceil(chunk_size);
    fs::create_dir_all(output_dir)?;

    let mut output_files = Vec::with_capacity(chunk_count);
    for (i, slice) in kept.chunks(chunk_size).enumerate() {
        let body = render_chunk(xml, &item_ranges, slice);
        let path = output_dir.join(chunk_file_name(i + 1, chunk_count));
        fs::write(&path, body).map_err(|source| SplitError::ChunkWrite {
            path: path.clone(),
            source,
        })?;
        tracing::info!(
            chunk = i + 1,
            total = chunk_count,
            items = slice.len(),
            path = %path.display(),
            "wrote chunk"
        );
        output_files.push(path);
    }

    Ok(output_files)
}

/// Render one chunk document: the source text with every item outside
/// `keep` removed. `keep` holds ascending indices into `item_ranges`.
fn render_chunk(xml: &str, item_ranges: &[Range<usize>], keep: &[usize]) -> String {
    let mut out = String::with_capacity(xml.len());

    if !xml.trim_start().starts_with("<?xml") {
        out.push_str(XML_DECLARATION);
        out.push('\n');
    }

    let mut keep_iter = keep.iter().peekable();
    let mut pos = 0;
    for (idx, range) in item_ranges.iter().enumerate() {
        out.push_str(&xml[pos..range.start]);
        if keep_iter.peek() == Some(&&idx) {
            out.push_str(&xml[range.start..range.end]);
            keep_iter.next();
        }
        pos = range.end;
    }
    out.push_str(&xml[pos..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use pretty_assertions::assert_eq;

    fn export(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:wp="http://wordpress.org/export/1.2/" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel>
<title>Test Blog</title>
<link>https://example.com</link>
<description>A test export</description>
{items}
</channel>
</rss>"#
        )
    }

    fn item(title: &str, post_type: &str) -> String {
        format!("<item><title>{title}</title><wp:post_type>{post_type}</wp:post_type></item>\n")
    }

    fn numbered_items(n: usize, post_type: &str) -> String {
        (0..n).map(|i| item(&format!("{post_type}-{i}"), post_type)).collect()
    }

    fn types(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_split_produces_ceil_n_over_s_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let xml = export(&numbered_items(25, "post"));

        let files = split_export(&xml, dir.path(), 10, &[]).unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(
            files[0].file_name().unwrap(),
            "wordpress_export_chunk_1_of_3.xml"
        );
        assert_eq!(
            files[2].file_name().unwrap(),
            "wordpress_export_chunk_3_of_3.xml"
        );

        let sizes: Vec<usize> = files
            .iter()
            .map(|f| analyze(&fs::read_to_string(f).unwrap()).total)
            .collect();
        assert_eq!(sizes, vec![10, 10, 5]);
    }

    #[test]
    fn test_split_exact_multiple() {
        let dir = tempfile::tempdir().unwrap();
        let xml = export(&numbered_items(20, "post"));

        let files = split_export(&xml, dir.path(), 10, &[]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_split_preserves_item_order_across_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let xml = export(&numbered_items(7, "post"));

        let files = split_export(&xml, dir.path(), 3, &[]).unwrap();

        let mut titles = Vec::new();
        for file in &files {
            let body = fs::read_to_string(file).unwrap();
            let doc = Document::parse(&body).unwrap();
            let channel = find_child(doc.root_element(), "channel").unwrap();
            for it in find_children(channel, "item") {
                titles.push(crate::xml::get_text(find_child(it, "title").unwrap()));
            }
        }

        let expected: Vec<String> = (0..7).map(|i| format!("post-{i}")).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_chunks_share_channel_metadata_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let xml = export(&numbered_items(4, "post"));

        let files = split_export(&xml, dir.path(), 2, &[]).unwrap();

        // Everything before the first item is the channel prelude (incl.
        // the namespace declarations); it must be carried verbatim.
        let prelude = xml.split("<item>").next().unwrap();
        for file in &files {
            let body = fs::read_to_string(file).unwrap();
            assert!(
                body.starts_with(prelude),
                "chunk {} lost channel prelude bytes",
                file.display()
            );
        }
    }

    #[test]
    fn test_split_filters_by_post_type() {
        let dir = tempfile::tempdir().unwrap();
        let items = format!(
            "{}{}{}",
            numbered_items(3, "post"),
            numbered_items(2, "page"),
            numbered_items(2, "attachment")
        );
        let xml = export(&items);

        let files = split_export(&xml, dir.path(), 10, &types(&["post", "page"])).unwrap();
        assert_eq!(files.len(), 1);

        let counts = analyze(&fs::read_to_string(&files[0]).unwrap());
        assert_eq!(counts.total, 5);
        assert_eq!(counts.posts, 3);
        assert_eq!(counts.pages, 2);
        assert_eq!(counts.attachments, 0);
    }

    #[test]
    fn test_split_filter_excludes_untyped_items() {
        let dir = tempfile::tempdir().unwrap();
        let items = format!("<item><title>untyped</title></item>{}", item("a", "post"));
        let xml = export(&items);

        let files = split_export(&xml, dir.path(), 10, &types(&["post"])).unwrap();
        let counts = analyze(&fs::read_to_string(&files[0]).unwrap());
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn test_split_absent_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let xml = export(&numbered_items(3, "post"));

        let err = split_export(&xml, dir.path(), 10, &types(&["page"])).unwrap_err();
        assert!(matches!(err, SplitError::NoMatchingItems { .. }));
    }

    #[test]
    fn test_split_no_channel_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = split_export("<rss><other/></rss>", dir.path(), 10, &[]).unwrap_err();
        assert!(matches!(err, SplitError::NoChannel));
    }

    #[test]
    fn test_split_no_items_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = split_export(&export(""), dir.path(), 10, &[]).unwrap_err();
        assert!(matches!(err, SplitError::NoItems));
    }

    #[test]
    fn test_split_zero_chunk_size_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = split_export(&export(&item("a", "post")), dir.path(), 0, &[]).unwrap_err();
        assert!(matches!(err, SplitError::InvalidChunkSize(0)));
    }

    #[test]
    fn test_split_malformed_xml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = split_export("<rss><channel><item></rss>", dir.path(), 10, &[]).unwrap_err();
        assert!(matches!(err, SplitError::XmlParse(_)));
    }

    #[test]
    fn test_split_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("run");
        let xml = export(&item("a", "post"));

        let files = split_export(&xml, &nested, 10, &[]).unwrap();
        assert!(files[0].exists());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_render_chunk_adds_missing_declaration() {
        let xml = "<rss><channel><item>a</item></channel></rss>";
        let doc = Document::parse(xml).unwrap();
        let channel = find_child(doc.root_element(), "channel").unwrap();
        let ranges: Vec<_> = find_children(channel, "item").map(|n| n.range()).collect();

        let body = render_chunk(xml, &ranges, &[0]);
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        Document::parse(&body).unwrap();
    }

    #[test]
    fn test_chunks_reparse_with_slice_item_counts() {
        let dir = tempfile::tempdir().unwrap();
        let xml = export(&numbered_items(11, "post"));

        let files = split_export(&xml, dir.path(), 4, &[]).unwrap();
        let sizes: Vec<usize> = files
            .iter()
            .map(|f| analyze(&fs::read_to_string(f).unwrap()).total)
            .collect();
        assert_eq!(sizes, vec![4, 4, 3]);
    }
}
