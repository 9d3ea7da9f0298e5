use crate::html::HtmlNode;

/// One contiguous run of inline text with a single semantic kind.
///
/// Spans are produced once per inline-parse pass and consumed immediately
/// during tree building; they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text that isn't part of any formatting construct.
    Text(String),
    /// `**bold**` text.
    Bold(String),
    /// `_italic_` text.
    Italic(String),
    /// `` `code` `` text.
    Code(String),
    /// `[text](url)` link.
    Link { text: String, url: String },
    /// `![alt](url)` image.
    Image { alt: String, url: String },
}

impl InlineSpan {
    /// Maps this span to its HTML leaf form.
    ///
    /// Plain text becomes a tagless raw node; everything else becomes a leaf
    /// element with the tag (and attributes) for its kind.
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            InlineSpan::Text(text) => HtmlNode::Text(text.clone()),
            InlineSpan::Bold(text) => HtmlNode::leaf("b", text.clone()),
            InlineSpan::Italic(text) => HtmlNode::leaf("i", text.clone()),
            InlineSpan::Code(text) => HtmlNode::leaf("code", text.clone()),
            InlineSpan::Link { text, url } => HtmlNode::Leaf {
                tag: "a".to_string(),
                value: text.clone(),
                attrs: vec![("href".to_string(), url.clone())],
            },
            InlineSpan::Image { alt, url } => HtmlNode::Leaf {
                tag: "img".to_string(),
                value: String::new(),
                attrs: vec![
                    ("src".to_string(), url.clone()),
                    ("alt".to_string(), alt.clone()),
                ],
            },
        }
    }
}
