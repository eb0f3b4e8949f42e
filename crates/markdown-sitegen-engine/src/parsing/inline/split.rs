use super::{
    error::InlineError,
    kinds::{Image, Link, MarkupMatch},
    types::{SpanKind, TextSpan},
};

/// Splits every plain span on its first `delimiter` pair.
///
/// One pass resolves at most one pair per span: the text after the closing
/// delimiter comes back as a new plain span for the next pass to rescan.
/// Empty before/between/after pieces are dropped.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let Some(start) = span.text.find(delimiter) else {
            out.push(span);
            continue;
        };
        let inner_start = start + delimiter.len();
        let Some(close) = span.text[inner_start..].find(delimiter) else {
            return Err(InlineError::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text,
            });
        };
        let inner_end = inner_start + close;

        let before = &span.text[..start];
        let between = &span.text[inner_start..inner_end];
        let after = &span.text[inner_end + delimiter.len()..];
        if !before.is_empty() {
            out.push(TextSpan::plain(before));
        }
        if !between.is_empty() {
            out.push(TextSpan::new(between, kind));
        }
        if !after.is_empty() {
            out.push(TextSpan::plain(after));
        }
    }
    Ok(out)
}

/// Applies [`split_spans_delimiter`] until no plain span contains `delimiter`.
///
/// Every pass removes a delimiter pair or fails, so the loop terminates.
pub fn split_spans_delimiter_repeated(
    mut spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    while has_plain_containing(&spans, delimiter) {
        spans = split_spans_delimiter(spans, delimiter, kind)?;
    }
    Ok(spans)
}

fn has_plain_containing(spans: &[TextSpan], delimiter: &str) -> bool {
    spans
        .iter()
        .any(|span| span.is_plain() && span.text.contains(delimiter))
}

/// Extracts `![alt](url)` markup from plain spans.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_markup(spans, Image::find_all, TextSpan::image)
}

/// Extracts `[text](url)` markup from plain spans, skipping image markup.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_markup(spans, Link::find_all, TextSpan::link)
}

fn split_spans_markup(
    spans: Vec<TextSpan>,
    find_all: fn(&str) -> Vec<MarkupMatch>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find_all(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut last = 0;
        for m in found {
            let before = &span.text[last..m.range.start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(make(m.text, m.url));
            last = m.range.end;
        }
        let rest = &span.text[last..];
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn split_code_delimiter() {
        let spans = vec![TextSpan::plain("This is text with a `code block` word")];
        assert_eq!(
            split_spans_delimiter(spans, "`", SpanKind::Code).unwrap(),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::new("code block", SpanKind::Code),
                TextSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn single_pass_resolves_one_pair() {
        let spans = vec![TextSpan::plain("**a** and **b**")];
        assert_eq!(
            split_spans_delimiter(spans, "**", SpanKind::Bold).unwrap(),
            vec![
                TextSpan::new("a", SpanKind::Bold),
                TextSpan::plain(" and **b**"),
            ]
        );
    }

    #[test]
    fn repeated_split_reaches_fixed_point() {
        let spans = vec![TextSpan::plain("**a** and **b** or **c**")];
        assert_eq!(
            split_spans_delimiter_repeated(spans, "**", SpanKind::Bold).unwrap(),
            vec![
                TextSpan::new("a", SpanKind::Bold),
                TextSpan::plain(" and "),
                TextSpan::new("b", SpanKind::Bold),
                TextSpan::plain(" or "),
                TextSpan::new("c", SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn adjacent_pairs_are_both_resolved() {
        let spans = vec![TextSpan::plain("**a****b**")];
        assert_eq!(
            split_spans_delimiter_repeated(spans, "**", SpanKind::Bold).unwrap(),
            vec![
                TextSpan::new("a", SpanKind::Bold),
                TextSpan::new("b", SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn empty_pair_is_dropped() {
        let spans = vec![TextSpan::plain("a ** ** b")];
        assert_eq!(
            split_spans_delimiter(spans, "**", SpanKind::Bold).unwrap(),
            vec![
                TextSpan::plain("a "),
                TextSpan::new(" ", SpanKind::Bold),
                TextSpan::plain(" b"),
            ]
        );
        let spans = vec![TextSpan::plain("a____b")];
        assert_eq!(
            split_spans_delimiter_repeated(spans, "_", SpanKind::Italic).unwrap(),
            vec![TextSpan::plain("a"), TextSpan::plain("b")]
        );
    }

    #[test]
    fn leftover_unterminated_after_empty_pair_fails() {
        let spans = vec![TextSpan::plain("****x**")];
        assert!(matches!(
            split_spans_delimiter_repeated(spans, "**", SpanKind::Bold),
            Err(InlineError::UnterminatedDelimiter { .. })
        ));
    }

    #[rstest]
    #[case("**", SpanKind::Bold, "an **unclosed bold")]
    #[case("_", SpanKind::Italic, "an _unclosed italic")]
    #[case("`", SpanKind::Code, "an `unclosed code")]
    fn unterminated_delimiter_fails(
        #[case] delimiter: &str,
        #[case] kind: SpanKind,
        #[case] text: &str,
    ) {
        let err = split_spans_delimiter(vec![TextSpan::plain(text)], delimiter, kind).unwrap_err();
        assert_eq!(
            err,
            InlineError::UnterminatedDelimiter {
                delimiter: delimiter.into(),
                text: text.into(),
            }
        );
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let spans = vec![
            TextSpan::new("has ** inside", SpanKind::Code),
            TextSpan::link("[x](y)", "z"),
        ];
        assert_eq!(
            split_spans_delimiter(spans.clone(), "**", SpanKind::Bold).unwrap(),
            spans
        );
        assert_eq!(split_spans_link(spans.clone()), spans);
    }

    #[test]
    fn split_images_between_text() {
        let spans = vec![TextSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_spans_image(spans),
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links_keeps_trailing_text() {
        let spans = vec![TextSpan::plain(
            "This is text with a link [to boot dev](https://www.boot.dev) and more",
        )];
        assert_eq!(
            split_spans_link(spans),
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to boot dev", "https://www.boot.dev"),
                TextSpan::plain(" and more"),
            ]
        );
    }

    #[test]
    fn link_pass_leaves_image_markup_as_text() {
        let spans = vec![TextSpan::plain("see ![alt](a.png)")];
        assert_eq!(
            split_spans_link(spans),
            vec![TextSpan::plain("see ![alt](a.png)")]
        );
    }

    #[test]
    fn markup_free_span_is_unchanged() {
        let spans = vec![TextSpan::plain("nothing here")];
        assert_eq!(split_spans_image(spans.clone()), spans);
    }
}
