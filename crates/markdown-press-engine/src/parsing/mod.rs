//! # Markdown Parsing
//!
//! The one-directional pipeline: raw text → blocks → (per block) inline
//! spans → HTML nodes → one assembled tree.
//!
//! Everything here is pure: no I/O, no shared state, and every failure is an
//! immediate, synchronous `Err`. Structural malformation (an unclosed
//! delimiter, a seven-`#` heading) is a hard stop for the whole document,
//! never repaired or partially rendered.

pub mod blocks;
pub mod inline;

use thiserror::Error;

use crate::html::{HtmlNode, RenderError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid markdown: {delimiter:?} section not closed")]
    MalformedInline { delimiter: String },
    #[error("invalid heading level: {0}")]
    InvalidHeadingLevel(usize),
    #[error("invalid code block: missing fence markers")]
    InvalidCodeBlock,
    #[error("invalid quote block: line missing '>' prefix")]
    InvalidQuoteBlock,
    #[error("no title found")]
    NoTitleFound,
}

/// Any failure while converting a document: parsing the Markdown or building
/// and rendering the HTML tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a whole Markdown document into a single `div`-rooted HTML tree.
///
/// Blocks appear as children in original document order. An empty document
/// is an error: a container element is never built with zero children.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ConvertError> {
    let blocks = blocks::segment(document);

    let mut children = Vec::with_capacity(blocks.len());
    for block in blocks {
        children.push(blocks::block_to_html_node(block)?);
    }

    if children.is_empty() {
        return Err(RenderError::EmptyTree("div".to_string()).into());
    }

    Ok(HtmlNode::parent("div", children))
}

/// Converts a Markdown document straight to its rendered HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(document)?.to_html()?)
}

/// Extracts the document title: the trimmed remainder of the first line
/// beginning with `#`.
pub fn extract_title(document: &str) -> Result<&str, ParseError> {
    document
        .lines()
        .find(|line| line.starts_with('#'))
        .map(|line| line.get(2..).unwrap_or("").trim())
        .ok_or(ParseError::NoTitleFound)
}
