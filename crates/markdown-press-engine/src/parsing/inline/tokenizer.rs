use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::ParseError;

use super::span::InlineSpan;

/// `![alt](url)` — alt tolerates one level of nested `[...]`, url one level
/// of nested `(...)`.
fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!\[((?:[^\[\]]|\[[^\[\]]*\])*)\]\(((?:[^()]|\([^()]*\))*)\)")
            .expect("invalid image regex")
    })
}

/// `[text](url)` with the same nesting tolerance as [`image_regex`]. The
/// leading-`!` exclusion is applied separately because the `regex` crate has
/// no lookbehind.
fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[((?:[^\[\]]|\[[^\[\]]*\])*)\]\(((?:[^()]|\([^()]*\))*)\)")
            .expect("invalid link regex")
    })
}

/// Tokenizes a run of text into an ordered sequence of inline spans.
///
/// Stages run in a fixed order; each one splits only the `Text` spans left by
/// the previous stage. See the module docs for the dialect's limitations.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    let spans = vec![InlineSpan::Text(text.to_string())];
    let spans = split_delimiter(spans, "**", InlineSpan::Bold)?;
    let spans = split_delimiter(spans, "_", InlineSpan::Italic)?;
    let spans = split_delimiter(spans, "`", InlineSpan::Code)?;
    let spans = split_markers(spans, image_markers);
    let spans = split_markers(spans, link_markers);
    Ok(spans)
}

/// Splits every `Text` span on a paired delimiter, wrapping the delimited
/// fragments with `wrap`.
///
/// Splitting must yield an odd number of fragments; an even count means an
/// opening delimiter was never closed. Fragments alternate outside/inside the
/// delimiter starting outside, and empty fragments are kept as empty `Text`
/// spans (a delimiter at the very start or end of the input produces one).
fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    wrap: fn(String) -> InlineSpan,
) -> Result<Vec<InlineSpan>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        let text = match span {
            InlineSpan::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let fragments: Vec<&str> = text.split(delimiter).collect();
        if fragments.len() % 2 == 0 {
            return Err(ParseError::MalformedInline {
                delimiter: delimiter.to_string(),
            });
        }
        for (i, fragment) in fragments.iter().enumerate() {
            if i % 2 == 0 {
                out.push(InlineSpan::Text((*fragment).to_string()));
            } else {
                out.push(wrap((*fragment).to_string()));
            }
        }
    }
    Ok(out)
}

/// Splits every `Text` span around the markers `find` locates in it.
///
/// For each marker, in left-to-right order, the remaining text is split on
/// the first occurrence of the literal matched marker; a non-empty prefix
/// stays as text, the marker becomes its typed span, and the suffix carries
/// over to the next marker. A non-empty final remainder stays as text.
fn split_markers(
    spans: Vec<InlineSpan>,
    find: fn(&str) -> Vec<(String, InlineSpan)>,
) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    for span in spans {
        let text = match span {
            InlineSpan::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let markers = find(&text);
        if markers.is_empty() {
            // no markers: the span passes through untouched, even when empty
            out.push(InlineSpan::Text(text));
            continue;
        }
        let mut remaining = text.as_str();
        for (marker, node) in markers {
            let Some((before, after)) = remaining.split_once(marker.as_str()) else {
                // markers come from the same text in the same order, so every
                // one is found in what remains
                break;
            };
            if !before.is_empty() {
                out.push(InlineSpan::Text(before.to_string()));
            }
            out.push(node);
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(InlineSpan::Text(remaining.to_string()));
        }
    }
    out
}

/// All image markers in `text`, as (literal match, span) pairs.
fn image_markers(text: &str) -> Vec<(String, InlineSpan)> {
    image_regex()
        .captures_iter(text)
        .map(|caps| {
            let span = InlineSpan::Image {
                alt: caps[1].to_string(),
                url: caps[2].to_string(),
            };
            (caps[0].to_string(), span)
        })
        .collect()
}

/// All link markers in `text`, excluding any match immediately preceded by
/// `!` (those are image markers, consumed by the previous stage).
fn link_markers(text: &str) -> Vec<(String, InlineSpan)> {
    link_regex()
        .captures_iter(text)
        .filter(|caps| {
            let start = caps.get(0).map_or(0, |m| m.start());
            start == 0 || text.as_bytes()[start - 1] != b'!'
        })
        .map(|caps| {
            let span = InlineSpan::Link {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            };
            (caps[0].to_string(), span)
        })
        .collect()
}
