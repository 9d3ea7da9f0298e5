//! # Inline Parsing
//!
//! Turns a run of text into an ordered sequence of typed [`InlineSpan`]s.
//!
//! ## Staged tokenization
//!
//! Each stage consumes only the `Text` spans left by the previous stage and
//! passes everything else through untouched:
//!
//! 1. `**` delimiter pairs → Bold
//! 2. `_` delimiter pairs → Italic
//! 3. `` ` `` delimiter pairs → Code
//! 4. `![alt](url)` markers → Image
//! 5. `[text](url)` markers (not preceded by `!`) → Link
//!
//! Delimiter splitting is literal string splitting, not recursive descent:
//! overlapping or improperly nested delimiters (`**a_b**c_`) are a known
//! limitation of the dialect. An unterminated delimiter is a hard
//! [`MalformedInline`](crate::parsing::ParseError::MalformedInline) failure
//! for the whole document.

pub mod span;
pub mod tokenizer;

pub use span::InlineSpan;
pub use tokenizer::tokenize;
