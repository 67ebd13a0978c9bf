//! Optional `plugin-build.toml` next to the plugin package.
//!
//! ```toml
//! [build]
//! assets_dir = "assets"
//! package_path = "."
//! cargo = "/opt/rust/bin/cargo"
//! locked = true
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::assets::DEFAULT_ASSETS_DIR;

pub const CONFIG_FILENAME: &str = "plugin-build.toml";

/// Resolved build settings. All paths are absolute or relative to the
/// directory the config was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory whose contents are copied into the output directory.
    pub assets_dir: PathBuf,
    /// Crate passed to `cargo install --path`.
    pub package_path: PathBuf,
    /// Explicit cargo executable; `None` means look it up on `PATH`.
    pub cargo: Option<PathBuf>,
    /// Pass `--locked` to `cargo install`.
    pub locked: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginBuildToml {
    #[serde(default)]
    build: BuildToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BuildToml {
    assets_dir: Option<String>,
    package_path: Option<String>,
    cargo: Option<String>,
    locked: Option<bool>,
}

impl BuildConfig {
    /// Defaults rooted at `base_dir`.
    pub fn defaults(base_dir: &Path) -> Self {
        Self {
            assets_dir: base_dir.join(DEFAULT_ASSETS_DIR),
            package_path: base_dir.to_path_buf(),
            cargo: None,
            locked: false,
        }
    }

    /// Load `plugin-build.toml` from `base_dir`, falling back to defaults
    /// when the file does not exist.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let config_path = base_dir.join(CONFIG_FILENAME);
        let raw = match fs::read_to_string(&config_path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::defaults(base_dir))
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("reading build config '{}'", config_path.display())
                })
            }
        };
        Self::parse(base_dir, &raw)
            .with_context(|| format!("parsing build config '{}'", config_path.display()))
    }

    /// Parse config text, resolving relative paths against `base_dir`.
    pub fn parse(base_dir: &Path, raw: &str) -> Result<Self> {
        let parsed: PluginBuildToml = toml::from_str(raw)?;
        let build = parsed.build;
        let defaults = Self::defaults(base_dir);

        Ok(Self {
            assets_dir: build
                .assets_dir
                .map(|p| resolve(base_dir, &p))
                .unwrap_or(defaults.assets_dir),
            package_path: build
                .package_path
                .map(|p| resolve(base_dir, &p))
                .unwrap_or(defaults.package_path),
            cargo: build.cargo.map(|p| resolve(base_dir, &p)),
            locked: build.locked.unwrap_or(defaults.locked),
        })
    }
}

fn resolve(base_dir: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
