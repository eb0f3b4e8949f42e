use std::{fmt, str::FromStr};

use serde::Serialize;

use super::error::InlineError;

/// The inline style of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Unstyled text, still eligible for further splitting.
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Stable textual name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether spans of this kind carry a url.
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl FromStr for SpanKind {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(InlineError::UnknownSpanKind(other.to_string())),
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous run of text with a single inline style.
///
/// `url` is present exactly when `kind` is `Link` or `Image`. Equality is
/// structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TextSpan {
    /// A span without a url. Use [`TextSpan::link`] or [`TextSpan::image`]
    /// for the url-carrying kinds.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    /// An image span; `alt` becomes the span text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextSpan({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
