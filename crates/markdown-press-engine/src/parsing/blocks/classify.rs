use crate::parsing::ParseError;

/// The code fence marker.
pub const FENCE: &str = "```";

/// The unordered list item marker.
pub const LIST_MARKER: &str = "- ";

/// The structural kind of a block. Exactly one kind per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` through `######` heading, carrying its level (1–6).
    Heading { level: u8 },
    Paragraph,
    /// A ``` fenced code block. Raw zone: no inline parsing inside.
    CodeFence,
    /// Every line prefixed with `>`.
    Quote,
    /// Every line prefixed with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, … strictly sequentially.
    OrderedList,
}

/// Classifies a block by a priority-ordered predicate chain; first match
/// wins. A block that superficially resembles a list or quote but breaks the
/// per-line rule falls through to `Paragraph`.
///
/// More than six leading `#` characters is an
/// [`InvalidHeadingLevel`](ParseError::InvalidHeadingLevel) error rather than
/// a deeper heading.
pub fn classify(block: &str) -> Result<BlockKind, ParseError> {
    let level = block.chars().take_while(|&c| c == '#').count();
    if level > 0 {
        if level > 6 {
            return Err(ParseError::InvalidHeadingLevel(level));
        }
        // the cast can't truncate with level <= 6
        return Ok(BlockKind::Heading { level: level as u8 });
    }

    if block.starts_with(FENCE) && block.ends_with(FENCE) {
        return Ok(BlockKind::CodeFence);
    }

    let lines: Vec<&str> = block.lines().collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return Ok(BlockKind::Quote);
    }

    if lines.iter().all(|line| line.starts_with(LIST_MARKER)) {
        return Ok(BlockKind::UnorderedList);
    }

    if block.starts_with("1. ")
        && lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return Ok(BlockKind::OrderedList);
    }

    Ok(BlockKind::Paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", BlockKind::Heading { level: 1 })]
    #[case("### Deep", BlockKind::Heading { level: 3 })]
    #[case("###### Deepest", BlockKind::Heading { level: 6 })]
    #[case("```\ncode\n```", BlockKind::CodeFence)]
    #[case("> quoted", BlockKind::Quote)]
    #[case("> a\n> b", BlockKind::Quote)]
    #[case("- one\n- two", BlockKind::UnorderedList)]
    #[case("1. a\n2. b\n3. c", BlockKind::OrderedList)]
    #[case("1. only", BlockKind::OrderedList)]
    #[case("plain text", BlockKind::Paragraph)]
    fn classifies_block(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block).unwrap(), expected);
    }

    #[rstest]
    // a broken per-line rule falls through to paragraph
    #[case("- one\nnot a list line")]
    #[case("> quoted\nnot quoted")]
    // ordered list numbering must be strictly sequential from 1
    #[case("1. a\n3. b")]
    #[case("2. a\n3. b")]
    // missing closing fence
    #[case("```\ncode")]
    // marker without its space is not a list
    #[case("-dash\n-dash")]
    fn falls_through_to_paragraph(#[case] block: &str) {
        assert_eq!(classify(block).unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn seven_hashes_is_an_error() {
        assert_eq!(
            classify("####### too deep").unwrap_err(),
            ParseError::InvalidHeadingLevel(7)
        );
    }

    #[test]
    fn classification_is_pure() {
        let block = "1. a\n2. b";
        assert_eq!(classify(block).unwrap(), classify(block).unwrap());
    }
}
