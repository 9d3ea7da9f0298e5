//! Page generation: one Markdown source file in, one templated HTML file out.

use relative_path::RelativePath;
use std::path::Path;
use thiserror::Error;

use crate::io::{self, IoError};
use crate::parsing::{ConvertError, ParseError, extract_title, markdown_to_html};

/// Placeholder token replaced with the extracted document title.
pub const TITLE_SLOT: &str = "{{ Title }}";

/// Placeholder token replaced with the rendered document body.
pub const CONTENT_SLOT: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Generates one HTML page from a Markdown file.
///
/// Reads `relative_path` under `content_root`, converts it, substitutes the
/// title and content slots in `template`, and writes the result to the same
/// relative path under `output_root` with an `.html` extension.
pub fn generate_page(
    relative_path: &RelativePath,
    content_root: &Path,
    template: &str,
    output_root: &Path,
) -> Result<(), GenerateError> {
    let markdown = io::read_file(relative_path, content_root)?;

    let html = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;

    let page = template.replace(TITLE_SLOT, title).replace(CONTENT_SLOT, &html);

    io::write_file(&relative_path.with_extension("html"), output_root, &page)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn generates_a_templated_page() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(content.path().join("index.md"), "# Home\n\nHello **world**").unwrap();

        generate_page(
            RelativePath::new("index.md"),
            content.path(),
            TEMPLATE,
            output.path(),
        )
        .unwrap();

        let page = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert_eq!(
            page,
            "<html><head><title>Home</title></head>\
             <body><div><h1>Home</h1><p>Hello <b>world</b></p></div></body></html>"
        );
    }

    #[test]
    fn output_mirrors_content_subdirectories() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir_all(content.path().join("blog")).unwrap();
        fs::write(content.path().join("blog/post.md"), "# Post\n\nbody").unwrap();

        generate_page(
            RelativePath::new("blog/post.md"),
            content.path(),
            TEMPLATE,
            output.path(),
        )
        .unwrap();

        assert!(output.path().join("blog/post.html").exists());
    }

    #[test]
    fn missing_source_file_is_an_io_error() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let result = generate_page(
            RelativePath::new("missing.md"),
            content.path(),
            TEMPLATE,
            output.path(),
        );
        assert!(matches!(result, Err(GenerateError::Io(IoError::NotFound(_)))));
    }

    #[test]
    fn document_without_heading_fails_title_extraction() {
        let content = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(content.path().join("bare.md"), "just a paragraph").unwrap();

        let result = generate_page(
            RelativePath::new("bare.md"),
            content.path(),
            TEMPLATE,
            output.path(),
        );
        assert!(matches!(
            result,
            Err(GenerateError::Parse(ParseError::NoTitleFound))
        ));
    }
}
