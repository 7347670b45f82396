use crate::parsing::ParseError;

use super::{
    kinds::{Delimiter, Image, Link},
    types::{SpanKind, TextSpan},
};

/// Tokenizes inline markdown into a sequence of [`TextSpan`]s.
///
/// # Pass Order
/// Code spans, then bold, then italic, then images, then links. Every pass
/// only re-splits spans that are still [`SpanKind::Plain`]; anything already
/// typed by an earlier pass is left alone.
///
/// # Errors
/// [`ParseError::UnbalancedDelimiter`] if a plain run holds an odd number of
/// any delimiter. No partial result is returned.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::plain(text)];
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Splits every plain span on `delimiter`.
///
/// Even-indexed sections keep the span's kind, odd-indexed sections take the
/// delimiter's kind. Empty sections are dropped, so `` `` `` yields nothing.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let count = span.text.matches(delimiter.marker).count();
        if count % 2 != 0 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: delimiter.marker,
                count,
            });
        }

        for (i, section) in span.text.split(delimiter.marker).enumerate() {
            if section.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 { span.kind } else { delimiter.kind };
            out.push(TextSpan::new(section, kind));
        }
    }

    Ok(out)
}

/// Pulls `![alt](url)` occurrences out of plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_extracted(spans, Image::extract, |alt, url| {
        (Image::markdown(alt, url), TextSpan::image(alt, url))
    })
}

/// Pulls `[text](url)` occurrences out of plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_extracted(spans, Link::extract, |text, url| {
        (Link::markdown(text, url), TextSpan::link(text, url))
    })
}

/// Shared image/link splitting.
///
/// For each extracted pair the working text is split on the first occurrence
/// of its literal markdown: the text before becomes a plain span (if
/// non-empty), the pair becomes `build`'s span, and scanning continues on the
/// remainder.
fn split_extracted<E, B>(spans: Vec<TextSpan>, extract: E, build: B) -> Vec<TextSpan>
where
    E: for<'a> Fn(&'a str) -> Vec<(&'a str, &'a str)>,
    B: Fn(&str, &str) -> (String, TextSpan),
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        for (text, url) in extract(&span.text) {
            let (literal, typed) = build(text, url);
            let Some((before, after)) = rest.split_once(literal.as_str()) else {
                continue;
            };
            if !before.is_empty() {
                out.push(TextSpan::new(before, span.kind));
            }
            out.push(typed);
            rest = after;
        }

        if !rest.is_empty() {
            out.push(TextSpan::new(rest, span.kind));
        }
    }

    out
}
