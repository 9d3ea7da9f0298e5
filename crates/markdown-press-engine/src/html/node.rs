use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid HTML: <{0}> element with no children")]
    EmptyTree(String),
}

/// A node in the HTML output tree.
///
/// Attributes are an ordered list of `(name, value)` pairs rather than a map
/// so that rendering the same tree always produces byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text with no surrounding tag. Rendered as-is, unescaped.
    Text(String),
    /// A leaf element: a tag wrapping a single (possibly empty) text value.
    Leaf {
        tag: String,
        value: String,
        attrs: Vec<(String, String)>,
    },
    /// A container element: a tag wrapping child nodes, no direct text value.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Creates a leaf element with no attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: tag.into(),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Creates a container element with no attributes.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Renders this node and its subtree to an HTML string.
    ///
    /// A `Parent` with no children is a construction error surfacing here as
    /// [`RenderError::EmptyTree`]; everything else renders infallibly.
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Text(value) => Ok(value.clone()),
            HtmlNode::Leaf { tag, value, attrs } => {
                Ok(format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs)))
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if children.is_empty() {
                    return Err(RenderError::EmptyTree(tag.clone()));
                }
                let mut inner = String::new();
                for child in children {
                    inner.push_str(&child.to_html()?);
                }
                Ok(format!("<{tag}{}>{inner}</{tag}>", render_attrs(attrs)))
            }
        }
    }
}

/// Renders attributes as ` key="value"` pairs, with a single leading space
/// only when at least one attribute exists.
fn render_attrs(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attrs
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    format!(" {}", pairs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_renders_raw() {
        let node = HtmlNode::Text("plain & raw".to_string());
        assert_eq!(node.to_html().unwrap(), "plain & raw");
    }

    #[test]
    fn leaf_renders_tag_pair() {
        let node = HtmlNode::leaf("b", "word");
        assert_eq!(node.to_html().unwrap(), "<b>word</b>");
    }

    #[test]
    fn leaf_with_attrs() {
        let node = HtmlNode::Leaf {
            tag: "a".to_string(),
            value: "Click me!".to_string(),
            attrs: vec![("href".to_string(), "https://example.com".to_string())],
        };
        assert_eq!(
            node.to_html().unwrap(),
            "<a href=\"https://example.com\">Click me!</a>"
        );
    }

    #[test]
    fn leaf_with_empty_value_keeps_closing_tag() {
        let node = HtmlNode::Leaf {
            tag: "img".to_string(),
            value: String::new(),
            attrs: vec![
                ("src".to_string(), "cat.png".to_string()),
                ("alt".to_string(), "a cat".to_string()),
            ],
        };
        assert_eq!(
            node.to_html().unwrap(),
            "<img src=\"cat.png\" alt=\"a cat\"></img>"
        );
    }

    #[test]
    fn parent_renders_children_in_order() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::Text("Hello ".to_string()),
                HtmlNode::leaf("b", "world"),
            ],
        );
        assert_eq!(node.to_html().unwrap(), "<p>Hello <b>world</b></p>");
    }

    #[test]
    fn nested_parents() {
        let inner = HtmlNode::parent("code", vec![HtmlNode::Text("let x = 1;".to_string())]);
        let node = HtmlNode::parent("pre", vec![inner]);
        assert_eq!(node.to_html().unwrap(), "<pre><code>let x = 1;</code></pre>");
    }

    #[test]
    fn parent_with_attrs_gets_single_leading_space() {
        let node = HtmlNode::Parent {
            tag: "div".to_string(),
            children: vec![HtmlNode::Text("x".to_string())],
            attrs: vec![
                ("class".to_string(), "wide".to_string()),
                ("id".to_string(), "main".to_string()),
            ],
        };
        assert_eq!(
            node.to_html().unwrap(),
            "<div class=\"wide\" id=\"main\">x</div>"
        );
    }

    #[test]
    fn empty_parent_fails() {
        let node = HtmlNode::parent("ul", vec![]);
        assert_eq!(
            node.to_html().unwrap_err(),
            RenderError::EmptyTree("ul".to_string())
        );
    }

    #[test]
    fn empty_child_deep_in_tree_fails() {
        let node = HtmlNode::parent("div", vec![HtmlNode::parent("ul", vec![])]);
        assert!(matches!(node.to_html(), Err(RenderError::EmptyTree(_))));
    }

    #[test]
    fn rendering_is_deterministic() {
        let node = HtmlNode::Parent {
            tag: "div".to_string(),
            children: vec![HtmlNode::leaf("p", "same")],
            attrs: vec![("id".to_string(), "a".to_string())],
        };
        assert_eq!(node.to_html().unwrap(), node.to_html().unwrap());
    }
}
