//! Output directory reset.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of [`reset_output_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Something was at the path and has been removed.
    Removed,
    /// Nothing existed at the path.
    AlreadyAbsent,
}

/// Remove `out_dir` recursively.
///
/// A missing path is not an error. Every other removal failure is.
/// A regular file or symlink at `out_dir` is removed as a file; the
/// target of a symlink is left alone.
pub fn reset_output_dir(out_dir: &Path) -> Result<ResetOutcome> {
    let metadata = match fs::symlink_metadata(out_dir) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(ResetOutcome::AlreadyAbsent)
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to inspect {}", out_dir.display()))
        }
    };

    let removal = if metadata.is_dir() {
        fs::remove_dir_all(out_dir)
    } else {
        fs::remove_file(out_dir)
    };

    match removal {
        Ok(()) => Ok(ResetOutcome::Removed),
        // Raced with something else deleting it.
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ResetOutcome::AlreadyAbsent),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to remove {}", out_dir.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reset_missing_dir_is_ok() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("does-not-exist");

        let outcome = reset_output_dir(&out).unwrap();

        assert_eq!(outcome, ResetOutcome::AlreadyAbsent);
        assert!(!out.exists());
    }

    #[test]
    fn test_reset_removes_nested_tree() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        fs::create_dir_all(out.join("linux/bin")).unwrap();
        fs::write(out.join("linux/bin/plugin"), b"stale").unwrap();
        fs::write(out.join("manifest.json"), b"{}").unwrap();

        let outcome = reset_output_dir(&out).unwrap();

        assert_eq!(outcome, ResetOutcome::Removed);
        assert!(!out.exists());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();

        assert_eq!(reset_output_dir(&out).unwrap(), ResetOutcome::Removed);
        assert_eq!(reset_output_dir(&out).unwrap(), ResetOutcome::AlreadyAbsent);
    }

    #[test]
    fn test_reset_removes_regular_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        fs::write(&out, b"not a directory").unwrap();

        assert_eq!(reset_output_dir(&out).unwrap(), ResetOutcome::Removed);
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_reset_fails_on_non_missing_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, b"regular file").unwrap();

        // A path below a regular file is "not a directory", not "not found",
        // regardless of privileges.
        let result = reset_output_dir(&file.join("out"));

        assert!(result.is_err(), "Should fail for a path under a file");
        assert!(file.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_reset_symlink_keeps_target() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("keep.txt"), b"keep").unwrap();
        let out = temp.path().join("out");
        std::os::unix::fs::symlink(&real, &out).unwrap();

        reset_output_dir(&out).unwrap();

        assert!(!out.is_symlink());
        assert!(real.join("keep.txt").exists());
    }
}
