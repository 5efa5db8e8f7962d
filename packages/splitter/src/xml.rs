//! XML utility functions for navigating WordPress export DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr_split::xml::get_tag_name;
///
/// let xml = r#"<rss><channel>text</channel></rss>"#;
/// let doc = Document::parse(xml).unwrap();
/// let channel = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(channel), "channel");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr_split::xml::find_child;
///
/// let xml = r#"<rss><channel/></rss>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_child(doc.root_element(), "channel").is_some());
/// assert!(find_child(doc.root_element(), "missing").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr_split::xml::find_children;
///
/// let xml = r#"<channel><item>1</item><item>2</item><title/></channel>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_children(doc.root_element(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get the text content of a node, trimmed.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text().map(str::trim).unwrap_or_default().to_string()
}

/// Read the post type of an `<item>` from its `wp:post_type` sub-element.
///
/// Matches on the local tag name so every WXR schema version (1.0 through
/// 1.2) resolves the same way. Returns `None` when the element is absent or
/// empty.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr_split::xml::item_post_type;
///
/// let xml = r#"<item xmlns:wp="http://wordpress.org/export/1.2/">
///     <wp:post_type>post</wp:post_type>
/// </item>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(item_post_type(doc.root_element()), Some("post".to_string()));
/// ```
pub fn item_post_type(item: Node<'_, '_>) -> Option<String> {
    let node = item
        .descendants()
        .find(|n| n.is_element() && get_tag_name(*n) == "post_type")?;
    let text = get_text(node);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
