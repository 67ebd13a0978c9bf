//! Copying the static assets folder into the output directory.
//!
//! Assets are opaque: nothing here looks inside the files.

use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default assets directory, relative to the plugin package.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Recursively copy the contents of `assets_dir` into `out_dir`.
///
/// `out_dir` is created if needed. Directories are recreated, regular
/// files copied, and symlinks preserved (not followed) on Unix.
///
/// Returns the number of non-directory entries copied.
pub fn copy_assets(assets_dir: &Path, out_dir: &Path) -> Result<usize> {
    if !assets_dir.is_dir() {
        bail!("assets directory not found: {}", assets_dir.display());
    }
    ensure_outside_assets(assets_dir, out_dir)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).follow_links(false).min_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to walk assets in {}", assets_dir.display()))?;
        let src_path = entry.path();
        let rel = src_path
            .strip_prefix(assets_dir)
            .with_context(|| format!("{} escaped {}", src_path.display(), assets_dir.display()))?;
        let dst_path = out_dir.join(rel);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&dst_path)
                .with_context(|| format!("Failed to create directory: {}", dst_path.display()))?;
        } else if file_type.is_symlink() {
            copy_symlink(src_path, &dst_path)?;
            copied += 1;
        } else {
            fs::copy(src_path, &dst_path)
                .with_context(|| format!("Failed to copy file: {}", src_path.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Refuse an `out_dir` that is `assets_dir` itself or lies inside it.
///
/// The copy would otherwise keep walking into the directories it creates,
/// and resetting such an `out_dir` deletes part of the assets.
pub fn ensure_outside_assets(assets_dir: &Path, out_dir: &Path) -> Result<()> {
    let assets = fs::canonicalize(assets_dir)
        .with_context(|| format!("Failed to resolve {}", assets_dir.display()))?;
    let out = resolve_existing_prefix(out_dir)?;
    if out.starts_with(&assets) {
        bail!(
            "output directory {} is inside the assets directory {}\n\
             Choose an output directory outside of the assets folder.",
            out_dir.display(),
            assets_dir.display()
        );
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor of `path` and re-append the
/// components that do not exist yet.
fn resolve_existing_prefix(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("resolving current directory")?
            .join(path)
    };

    let mut existing = absolute.as_path();
    let mut missing: Vec<OsString> = Vec::new();
    loop {
        if let Ok(mut resolved) = fs::canonicalize(existing) {
            for name in missing.iter().rev() {
                resolved.push(name);
            }
            return Ok(resolved);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute.clone()),
        }
    }
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src)
        .with_context(|| format!("Failed to read symlink: {}", src.display()))?;
    std::os::unix::fs::symlink(&target, dst)
        .with_context(|| format!("Failed to create symlink: {}", dst.display()))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    // No portable symlink creation; copy what the link points at.
    fs::copy(src, dst).with_context(|| format!("Failed to copy file: {}", src.display()))?;
    Ok(())
}
