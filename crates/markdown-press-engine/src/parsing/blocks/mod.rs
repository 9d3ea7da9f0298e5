//! # Block Parsing
//!
//! Splits a document into blank-line-delimited blocks, classifies each by
//! structural kind, and builds one HTML node per block.
//!
//! ## Modules
//!
//! - **`segment`**: `segment()` splits on blank lines and trims
//! - **`classify`**: `BlockKind` and the priority-ordered predicate chain
//! - **`builder`**: one builder per kind, dispatched exhaustively
//!
//! Blocks are flat: nested block structures (a list inside a quote, etc.) are
//! outside the dialect. A block that breaks a per-line rule falls through to
//! a paragraph rather than being repaired.

pub mod builder;
pub mod classify;
pub mod segment;

pub use builder::block_to_html_node;
pub use classify::{BlockKind, classify};
pub use segment::segment;
