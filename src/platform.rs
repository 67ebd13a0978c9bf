//! Platform identifier used to namespace the install root.
//!
//! The plugin host looks for binaries under `<plugin>/<os>/bin`, using
//! `darwin` rather than `macos` for Apple targets.

/// Map a Rust OS name (`std::env::consts::OS`) to the plugin host's name.
pub fn platform_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Platform identifier of the running OS.
pub fn current_platform() -> &'static str {
    platform_name(std::env::consts::OS)
}
