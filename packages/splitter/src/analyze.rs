//! Export analysis: parse the document and classify its items.

use roxmltree::Document;

use crate::types::{ItemCounts, ItemKind};
use crate::xml::{find_child, find_children, item_post_type};

/// Analyze a WordPress export document and count its items by post type.
///
/// Returns all-zero counts when the text is not well-formed XML or has no
/// `<channel>` element. That sentinel is deliberate: callers treat "nothing
/// to import" and "not a WordPress export" the same way, and the split
/// operation reports the precise failure when they go on to split anyway.
#[must_use]
pub fn analyze(xml: &str) -> ItemCounts {
    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(error = %e, "export failed to parse, reporting zero counts");
            return ItemCounts::default();
        }
    };

    let Some(channel) = find_child(doc.root_element(), "channel") else {
        tracing::debug!("export has no channel element, reporting zero counts");
        return ItemCounts::default();
    };

    let mut counts = ItemCounts::default();
    for item in find_children(channel, "item") {
        let post_type = item_post_type(item);
        counts.record(ItemKind::from_type(post_type.as_deref()));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn export_with_items(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
<title>Test Blog</title>
{items}
</channel>
</rss>"#
        )
    }

    fn item(post_type: &str) -> String {
        format!("<item><title>x</title><wp:post_type>{post_type}</wp:post_type></item>")
    }

    #[test]
    fn test_analyze_counts_by_type() {
        let mut items = String::new();
        for _ in 0..10 {
            items.push_str(&item("post"));
        }
        for _ in 0..5 {
            items.push_str(&item("page"));
        }
        for _ in 0..2 {
            items.push_str(&item("attachment"));
        }
        for _ in 0..3 {
            items.push_str(&item("nav_menu_item"));
        }

        let counts = analyze(&export_with_items(&items));
        assert_eq!(
            counts,
            ItemCounts {
                total: 20,
                posts: 10,
                pages: 5,
                attachments: 2,
                other: 3,
            }
        );
    }

    #[test]
    fn test_analyze_missing_post_type_is_other() {
        let counts = analyze(&export_with_items("<item><title>untyped</title></item>"));
        assert_eq!(counts.total, 1);
        assert_eq!(counts.other, 1);
    }

    #[test]
    fn test_analyze_no_channel_returns_zero_counts() {
        let counts = analyze(r#"<rss version="2.0"><other/></rss>"#);
        assert_eq!(counts, ItemCounts::default());
    }

    #[test]
    fn test_analyze_malformed_xml_returns_zero_counts() {
        let counts = analyze("<rss><channel><item></rss>");
        assert_eq!(counts, ItemCounts::default());
    }

    #[test]
    fn test_analyze_empty_channel() {
        let counts = analyze(&export_with_items(""));
        assert!(counts.is_empty());
    }
}
