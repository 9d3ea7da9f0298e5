//! # HTML Output Tree
//!
//! A small tagged tree representing the HTML document produced from a parsed
//! Markdown document, plus its renderer.
//!
//! The "value XOR children" duality is modeled as separate enum variants
//! (`Leaf` vs `Parent`) so that a node carrying both, or neither, cannot be
//! constructed in the first place.

pub mod node;

pub use node::{HtmlNode, RenderError};
