//! Positional argument parsing for `plugin-builder <outDir> <target>`.

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Arguments of a single build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Directory that is reset and filled with the plugin contents.
    pub out_dir: PathBuf,
    /// Target triple handed to `cargo install --target`.
    pub target: String,
}

pub fn usage() -> &'static str {
    "Usage:\n  plugin-builder <out_dir> <target>\n\nExample:\n  plugin-builder com.example.plugin.sdPlugin x86_64-unknown-linux-gnu"
}

impl Invocation {
    /// Parse arguments with the program name already stripped.
    ///
    /// Anything after the second argument is ignored.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [out_dir, target, ..] => {
                let out_dir = out_dir.as_ref();
                let target = target.as_ref();
                if out_dir.trim().is_empty() || target.trim().is_empty() {
                    bail!(usage());
                }
                Ok(Self {
                    out_dir: PathBuf::from(out_dir),
                    target: target.to_string(),
                })
            }
            _ => bail!(usage()),
        }
    }
}
