use crate::html::HtmlNode;

/// Tags that only ever appear on leaves produced from inline spans.
const INLINE_TAGS: [&str; 5] = ["b", "i", "code", "a", "img"];

/// Panics if the tree breaks a structural invariant.
///
/// `<code>` is also allowed as the parent inside `<pre>`.
pub fn check(node: &HtmlNode) {
    check_node(node, None);
}

fn check_node(node: &HtmlNode, parent_tag: Option<&str>) {
    match node {
        HtmlNode::Leaf { tag, value, .. } => {
            assert!(value.is_some(), "leaf without value: {node}");
            if let Some(tag) = tag {
                assert!(
                    INLINE_TAGS.contains(&tag.as_str()),
                    "unexpected leaf tag <{tag}>"
                );
            }
        }
        HtmlNode::Parent { tag, children, .. } => {
            let tag = tag
                .as_deref()
                .unwrap_or_else(|| panic!("parent without tag: {node}"));
            assert!(children.is_some(), "parent <{tag}> without children");
            assert!(
                !INLINE_TAGS.contains(&tag) || (tag == "code" && parent_tag == Some("pre")),
                "inline tag <{tag}> used as a parent"
            );
            for child in node.children() {
                check_node(child, Some(tag));
            }
        }
    }
}
