use crate::html::HtmlNode;
use crate::parsing::ParseError;
use crate::parsing::inline::{InlineSpan, tokenize};

use super::classify::{BlockKind, FENCE, classify};

/// Converts one block into its HTML node, dispatching on the block's kind.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    match classify(block)? {
        BlockKind::Heading { level } => heading_to_html(block, level),
        BlockKind::Paragraph => paragraph_to_html(block),
        BlockKind::CodeFence => code_to_html(block),
        BlockKind::Quote => quote_to_html(block),
        BlockKind::UnorderedList => unordered_list_to_html(block),
        BlockKind::OrderedList => ordered_list_to_html(block),
    }
}

/// Tokenizes a run of literal text into HTML child nodes.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize(text)?
        .iter()
        .map(InlineSpan::to_html_node)
        .collect())
}

fn heading_to_html(block: &str, level: u8) -> Result<HtmlNode, ParseError> {
    let text = block[usize::from(level)..].trim();
    Ok(HtmlNode::parent(
        format!("h{level}"),
        text_to_children(text)?,
    ))
}

/// Hard line breaks inside a paragraph collapse to a single space.
fn paragraph_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

/// Code content is inserted as a single raw text span; formatting markers
/// inside the fence are not interpreted.
fn code_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let inner = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .ok_or(ParseError::InvalidCodeBlock)?;
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    let code = HtmlNode::parent("code", vec![HtmlNode::Text(inner.to_string())]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let mut stripped = Vec::new();
    for line in block.lines() {
        // unreachable given classification, but builders stay defensive
        if !line.starts_with('>') {
            return Err(ParseError::InvalidQuoteBlock);
        }
        stripped.push(line.trim_start_matches('>').trim());
    }
    let text = stripped.join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn unordered_list_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let text = line.trim_start_matches('-').trim();
        items.push(HtmlNode::parent("li", text_to_children(text)?));
    }
    Ok(HtmlNode::parent("ul", items))
}

/// The `{n}. ` marker is stripped at a fixed 2-byte offset; list numbers are
/// assumed single-digit.
fn ordered_list_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let text = line[2..].trim();
        items.push(HtmlNode::parent("li", text_to_children(text)?));
    }
    Ok(HtmlNode::parent("ol", items))
}
