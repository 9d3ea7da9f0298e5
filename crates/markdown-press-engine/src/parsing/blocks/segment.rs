/// Splits a document into its block-level units.
///
/// Blocks are separated by a fully blank line (the exact `\n\n` sequence).
/// Each block is trimmed of leading and trailing whitespace; blocks that are
/// empty after trimming (from 3+ consecutive newlines, leading or trailing
/// blank lines, or whitespace-only runs) are discarded. Document order is
/// preserved.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
