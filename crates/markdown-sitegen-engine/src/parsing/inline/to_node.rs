use crate::html::HtmlNode;

use super::types::{SpanKind, TextSpan};

/// Maps one span onto the leaf node that renders it.
///
/// A link or image span built without a url gets an empty `href`/`src`.
pub fn span_to_html_node(span: &TextSpan) -> HtmlNode {
    let url = || span.url.clone().unwrap_or_default();
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.text.as_str()),
        SpanKind::Bold => HtmlNode::leaf("b", span.text.as_str()),
        SpanKind::Italic => HtmlNode::leaf("i", span.text.as_str()),
        SpanKind::Code => HtmlNode::leaf("code", span.text.as_str()),
        SpanKind::Link => HtmlNode::leaf("a", span.text.as_str()).with_attribute("href", url()),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url())
            .with_attribute("alt", span.text.as_str()),
    }
}

pub fn spans_to_html_nodes(spans: &[TextSpan]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_html_node).collect()
}
