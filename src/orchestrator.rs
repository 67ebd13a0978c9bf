//! The build sequence: preflight, reset, copy assets, `cargo install`.
//!
//! Every step runs to completion before the next one starts, so the
//! asset copy is finished before cargo writes into the same directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::assets::copy_assets;
use crate::cargo::InstallCommand;
use crate::config::BuildConfig;
use crate::invocation::Invocation;
use crate::output::{reset_output_dir, ResetOutcome};
use crate::platform::current_platform;
use crate::preflight;

/// What a successful build did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// `--root` handed to cargo, i.e. `<out_dir>/<platform>`.
    pub install_root: PathBuf,
    pub platform: &'static str,
    pub reset: ResetOutcome,
    pub assets_copied: usize,
}

/// Install root for a platform: `<out_dir>/<platform>`.
pub fn install_root(out_dir: &Path, platform: &str) -> PathBuf {
    out_dir.join(platform)
}

/// Rebuild the plugin directory named by `invocation`.
pub fn build_plugin(invocation: &Invocation, config: &BuildConfig) -> Result<BuildReport> {
    let out_dir = &invocation.out_dir;
    let preflight = preflight::check(config, out_dir)?;

    let reset = reset_output_dir(out_dir)
        .with_context(|| format!("resetting output directory '{}'", out_dir.display()))?;
    match reset {
        ResetOutcome::Removed => {
            println!("[plugin-build] removed previous output {}", out_dir.display())
        }
        ResetOutcome::AlreadyAbsent => {
            println!("[plugin-build] no previous output at {}", out_dir.display())
        }
    }

    let assets_copied = copy_assets(&config.assets_dir, out_dir).with_context(|| {
        format!(
            "copying assets from '{}' to '{}'",
            config.assets_dir.display(),
            out_dir.display()
        )
    })?;
    println!(
        "[plugin-build] copied {} asset file(s) into {}",
        assets_copied,
        out_dir.display()
    );

    let platform = current_platform();
    let install = InstallCommand {
        cargo: preflight.cargo,
        package_path: config.package_path.clone(),
        target: invocation.target.clone(),
        root: install_root(out_dir, platform),
        locked: config.locked,
    };
    println!(
        "[plugin-build] cargo install --target {} --root {}",
        install.target,
        install.root.display()
    );
    install
        .run()
        .with_context(|| format!("building plugin binary for '{}'", invocation.target))?;

    println!("[plugin-build] plugin ready at {}", out_dir.display());

    Ok(BuildReport {
        out_dir: out_dir.clone(),
        install_root: install.root,
        platform,
        reset,
        assets_copied,
    })
}
