use std::fmt;

use serde::Serialize;

use crate::options::Options;

use super::attributes::Attributes;

/// Structural failures detected while rendering a node tree.
///
/// These indicate a caller bug in tree assembly and are fatal for the
/// render call that hit them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value (tag: {tag:?})")]
    MissingValue { tag: Option<String> },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// A renderable HTML node.
///
/// Fields are optional so that a tree can be assembled before it is
/// validated; [`HtmlNode::render`] reports any missing required part.
/// The constructors (`text`, `leaf`, `parent`) always build valid nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum HtmlNode {
    /// An element with literal content and no children.
    ///
    /// A leaf without a tag is raw text and renders as its value alone.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        #[serde(skip_serializing_if = "Attributes::is_empty")]
        attributes: Attributes,
    },
    /// An element wrapping an ordered list of child nodes.
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        #[serde(skip_serializing_if = "Attributes::is_empty")]
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Raw text with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter, preserving insertion order.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent node; empty for leaves and for parents whose
    /// children list is absent.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Serializes the node and its subtree to an HTML string.
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&Options::default())
    }

    /// Like [`HtmlNode::render`], honouring `options.escape_attributes`.
    pub fn render_with(&self, options: &Options) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out, options)?;
        Ok(out)
    }

    /// The attribute string placed inside this node's opening tag.
    pub fn render_attributes(&self) -> String {
        self.render_attributes_with(&Options::default())
    }

    pub fn render_attributes_with(&self, options: &Options) -> String {
        self.attributes().render(options.escape_attributes)
    }

    fn write_html(&self, out: &mut String, options: &Options) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value
                    .as_deref()
                    .ok_or_else(|| RenderError::MissingValue { tag: tag.clone() })?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        write_open(out, tag, attributes, options);
                        out.push_str(value);
                        write_close(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
                let children = children.as_ref().ok_or_else(|| RenderError::MissingChildren {
                    tag: tag.to_string(),
                })?;
                write_open(out, tag, attributes, options);
                for child in children {
                    child.write_html(out, options)?;
                }
                write_close(out, tag);
            }
        }
        Ok(())
    }
}

fn write_open(out: &mut String, tag: &str, attributes: &Attributes, options: &Options) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.render(options.escape_attributes));
    out.push('>');
}

fn write_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => write!(
                f,
                "LeafNode({}, {:?}, {attributes})",
                tag.as_deref().unwrap_or("None"),
                value.as_deref().unwrap_or_default()
            ),
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                write!(f, "ParentNode({}, [", tag.as_deref().unwrap_or("None"))?;
                for (i, child) in children.iter().flatten().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "], {attributes})")
            }
        }
    }
}
