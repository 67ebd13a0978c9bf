//! Preflight checks run before the output directory is touched.
//!
//! A build that is going to fail on a missing assets folder or a missing
//! toolchain should fail before it deletes the previous output.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::assets::ensure_outside_assets;
use crate::cargo::find_cargo;
use crate::config::BuildConfig;

/// Inputs confirmed to be present on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    /// Resolved cargo executable.
    pub cargo: PathBuf,
}

/// Validate the assets directory against `out_dir` and resolve cargo.
pub fn check(config: &BuildConfig, out_dir: &Path) -> Result<Preflight> {
    if !config.assets_dir.is_dir() {
        bail!(
            "assets directory not found: {}\n\
             Run from the plugin package root or set `assets_dir` in plugin-build.toml.",
            config.assets_dir.display()
        );
    }
    ensure_outside_assets(&config.assets_dir, out_dir)?;

    let cargo = find_cargo(config.cargo.as_deref())?;
    Ok(Preflight { cargo })
}
