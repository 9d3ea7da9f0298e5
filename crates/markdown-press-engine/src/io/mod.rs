use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to an output file, creating parent directories as needed
pub fn write_file(
    relative_path: &RelativePath,
    output_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(output_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory, sorted for a stable
/// generation order
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Copy a directory tree (static assets) into the destination, creating it
/// if needed
pub fn copy_dir_recursive(source_dir: &Path, dest_dir: &Path) -> Result<(), IoError> {
    if !dest_dir.exists() {
        fs::create_dir_all(dest_dir).map_err(IoError::Io)?;
    }

    for entry in fs::read_dir(source_dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if from_path.is_file() {
            fs::copy(&from_path, &dest_path).map_err(IoError::Io)?;
        } else {
            copy_dir_recursive(&from_path, &dest_path)?;
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
