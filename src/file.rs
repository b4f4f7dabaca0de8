// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::OfferLayout;
use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Invalid(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Create/truncate `path` (and its parent dirs) with `contents`.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Place one page under `offers_dir` according to `layout`. Overwrites.
/// Returns the path written.
pub fn write_offer_page(offers_dir: &Path, slug: &str, layout: OfferLayout, html: &str) -> Result<PathBuf> {
    let path = offers_dir.join(layout.page_path(slug));
    write_text(&path, html)?;
    Ok(path)
}

/// Pretty JSON array of slugs, in the order given.
pub fn write_manifest(path: &Path, slugs: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(slugs)?;
    write_text(path, &json)
}

/// Copy `path` to `<stem>_backup.<ext>` next to it. Returns the backup path.
pub fn backup_file(path: &Path) -> Result<PathBuf> {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_backup.{}", stem, ext.to_string_lossy()),
        None => join!(&stem, "_backup"),
    };
    let backup = path.with_file_name(name);
    fs::copy(path, &backup)?;
    Ok(backup)
}
