//! Core data types for export analysis and splitting.

use serde::{Deserialize, Serialize};

/// Classification of a WordPress export item by its `wp:post_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A blog post (`post`).
    Post,
    /// A static page (`page`).
    Page,
    /// A media attachment (`attachment`).
    Attachment,
    /// Any other or missing post type (nav menu items, custom types, ...).
    Other,
}

impl ItemKind {
    /// Classify a `wp:post_type` value. `None` (absent element) maps to Other.
    #[must_use]
    pub fn from_type(post_type: Option<&str>) -> Self {
        match post_type {
            Some("post") => Self::Post,
            Some("page") => Self::Page,
            Some("attachment") => Self::Attachment,
            _ => Self::Other,
        }
    }

    /// Canonical post-type string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Attachment => "attachment",
            Self::Other => "other",
        }
    }
}

/// Classification summary of an export document.
///
/// All-zero counts are the invalid-file sentinel: an export without a
/// channel element (or one that fails to parse) analyzes to zeros rather
/// than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCounts {
    /// Total number of items under the channel.
    pub total: usize,
    /// Items with post type `post`.
    pub posts: usize,
    /// Items with post type `page`.
    pub pages: usize,
    /// Items with post type `attachment`.
    pub attachments: usize,
    /// Items with any other or missing post type.
    pub other: usize,
}

impl ItemCounts {
    /// Record one item of the given kind.
    pub fn record(&mut self, kind: ItemKind) {
        self.total += 1;
        match kind {
            ItemKind::Post => self.posts += 1,
            ItemKind::Page => self.pages += 1,
            ItemKind::Attachment => self.attachments += 1,
            ItemKind::Other => self.other += 1,
        }
    }

    /// Whether this summary is the all-zero sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_kind_from_type() {
        assert_eq!(ItemKind::from_type(Some("post")), ItemKind::Post);
        assert_eq!(ItemKind::from_type(Some("page")), ItemKind::Page);
        assert_eq!(
            ItemKind::from_type(Some("attachment")),
            ItemKind::Attachment
        );
        assert_eq!(ItemKind::from_type(Some("nav_menu_item")), ItemKind::Other);
        assert_eq!(ItemKind::from_type(None), ItemKind::Other);
    }

    #[test]
    fn test_record_updates_total_and_bucket() {
        let mut counts = ItemCounts::default();
        counts.record(ItemKind::Post);
        counts.record(ItemKind::Post);
        counts.record(ItemKind::Attachment);
        counts.record(ItemKind::Other);

        assert_eq!(
            counts,
            ItemCounts {
                total: 4,
                posts: 2,
                pages: 0,
                attachments: 1,
                other: 1,
            }
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(ItemCounts::default().is_empty());

        let mut counts = ItemCounts::default();
        counts.record(ItemKind::Page);
        assert!(!counts.is_empty());
    }
}
