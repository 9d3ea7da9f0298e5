use anyhow::{Context, Result};
use markdown_press_config::Config;
use markdown_press_engine::{io, page};
use relative_path::RelativePathBuf;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

fn main() {
    let site_root = match parse_args() {
        Some(root) => root,
        None => {
            eprintln!("usage: mdpress [site-root]");
            process::exit(2);
        }
    };

    if let Err(e) = build_site(&site_root) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// One optional positional argument: the site root (default: cwd).
fn parse_args() -> Option<PathBuf> {
    let mut args = env::args().skip(1);
    let root = match args.next() {
        Some(arg) if arg == "-h" || arg == "--help" => return None,
        Some(arg) => PathBuf::from(arg),
        None => PathBuf::from("."),
    };
    // anything after the root is a usage error
    if args.next().is_some() {
        return None;
    }
    Some(root)
}

fn build_site(site_root: &Path) -> Result<()> {
    let config = Config::load_from_root(site_root)
        .context("failed to load site config")?
        .unwrap_or_default();

    let content_dir = site_root.join(&config.content_dir);
    let static_dir = site_root.join(&config.static_dir);
    let output_dir = site_root.join(&config.output_dir);
    let template_path = site_root.join(&config.template_path);

    io::validate_content_dir(&content_dir)
        .with_context(|| format!("invalid content directory {}", content_dir.display()))?;
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;

    if output_dir.exists() {
        eprintln!("removing {}", output_dir.display());
        fs::remove_dir_all(&output_dir)
            .with_context(|| format!("failed to remove {}", output_dir.display()))?;
    }

    if static_dir.exists() {
        eprintln!(
            "copying static files {} -> {}",
            static_dir.display(),
            output_dir.display()
        );
        io::copy_dir_recursive(&static_dir, &output_dir).context("failed to copy static files")?;
    }

    for source in io::scan_markdown_files(&content_dir)? {
        let relative = source_relative_path(&source, &content_dir)?;
        eprintln!(
            "generating {} -> {}",
            source.display(),
            relative.with_extension("html").to_path(&output_dir).display()
        );
        page::generate_page(&relative, &content_dir, &template, &output_dir)
            .with_context(|| format!("failed to generate page from {}", source.display()))?;
    }

    Ok(())
}

/// The content-relative path of a scanned markdown file.
fn source_relative_path(source: &Path, content_dir: &Path) -> Result<RelativePathBuf> {
    let relative = source
        .strip_prefix(content_dir)
        .with_context(|| format!("{} is outside the content directory", source.display()))?;
    RelativePathBuf::from_path(relative)
        .with_context(|| format!("non-relative source path {}", source.display()))
}
