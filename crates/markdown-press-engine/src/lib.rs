pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError};
pub use page::{GenerateError, generate_page};
pub use parsing::{
    ConvertError, ParseError, extract_title, markdown_to_html, markdown_to_html_node,
};
