//! `cargo install` delegation.
//!
//! Resolution order for the cargo executable:
//! 1. `cargo` from `plugin-build.toml`
//! 2. System PATH (`which cargo`)

use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Locate the cargo executable.
pub fn find_cargo(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        bail!(
            "configured cargo points to non-existent path: {}\n\
             Fix the `cargo` key in plugin-build.toml or remove it to use PATH.",
            path.display()
        );
    }

    which::which("cargo").map_err(|_| {
        anyhow::anyhow!(
            "Could not find cargo on PATH.\n\n\
             Solutions:\n\
             - Install a Rust toolchain (https://rustup.rs)\n\
             - Set `cargo = \"/path/to/cargo\"` under [build] in plugin-build.toml"
        )
    })
}

/// A fully specified `cargo install` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub cargo: PathBuf,
    pub package_path: PathBuf,
    pub target: String,
    /// Directory passed to `--root`; the binary lands in `<root>/bin`.
    pub root: PathBuf,
    pub locked: bool,
}

impl InstallCommand {
    /// Arguments after the program name.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "install".into(),
            "--path".into(),
            self.package_path.clone().into(),
            "--target".into(),
            self.target.clone().into(),
            "--root".into(),
            self.root.clone().into(),
        ];
        if self.locked {
            args.push("--locked".into());
        }
        args
    }

    /// Run the install with inherited stdio and return its exit status.
    pub fn status(&self) -> Result<ExitStatus> {
        Command::new(&self.cargo)
            .args(self.args())
            .status()
            .with_context(|| format!("Failed to execute {}", self.cargo.display()))
    }

    /// Run the install, failing on a non-success exit status.
    pub fn run(&self) -> Result<()> {
        let status = self.status()?;
        if !status.success() {
            bail!(
                "cargo install failed for target '{}'\n  Exit code: {}",
                self.target,
                status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "terminated by signal".to_string())
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install(locked: bool) -> InstallCommand {
        InstallCommand {
            cargo: PathBuf::from("cargo"),
            package_path: PathBuf::from("."),
            target: "x86_64-pc-windows-msvc".to_string(),
            root: PathBuf::from("/tmp/out/linux"),
            locked,
        }
    }

    #[test]
    fn test_args_have_install_shape() {
        let args = install(false).args();
        let expected: Vec<OsString> = [
            "install",
            "--path",
            ".",
            "--target",
            "x86_64-pc-windows-msvc",
            "--root",
            "/tmp/out/linux",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_locked_flag_is_appended() {
        let args = install(true).args();
        assert_eq!(args.last().unwrap(), "--locked");
        assert_eq!(args.len(), 8);
    }

    #[test]
    fn test_find_cargo_rejects_missing_configured_path() {
        let err = find_cargo(Some(Path::new("/definitely/not/cargo-12345"))).unwrap_err();
        assert!(err.to_string().contains("non-existent"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_exit_status() {
        let ok = InstallCommand {
            cargo: PathBuf::from("true"),
            ..install(false)
        };
        let failing = InstallCommand {
            cargo: PathBuf::from("false"),
            ..install(false)
        };

        assert!(ok.run().is_ok());
        let err = failing.run().unwrap_err();
        assert!(err.to_string().contains("Exit code: 1"));
    }

    #[test]
    fn test_run_reports_spawn_failure() {
        let missing = InstallCommand {
            cargo: PathBuf::from("definitely_not_a_real_command_12345"),
            ..install(false)
        };
        assert!(missing.run().is_err());
    }
}
