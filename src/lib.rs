//! Build helper for native plugin packages.
//!
//! Assembles a plugin directory (e.g. `com.example.plugin.sdPlugin`) from a
//! static `assets/` folder and a binary built with `cargo install`:
//!
//! - **Reset** - Remove the previous output directory, if any
//! - **Assets** - Copy `assets/` into the output directory
//! - **Install** - `cargo install --target <triple> --root <out>/<platform>`
//!
//! # Layout produced
//!
//! ```text
//! <out_dir>/
//!     ├── manifest.json, icons, ...   (copied from assets/)
//!     └── <platform>/                 (linux, darwin, windows, ...)
//!         └── bin/<plugin binary>     (written by cargo install)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use plugin_builder::{build_plugin, BuildConfig, Invocation};
//!
//! let invocation = Invocation::parse(&["out.sdPlugin", "x86_64-unknown-linux-gnu"])?;
//! let config = BuildConfig::load(&std::env::current_dir()?)?;
//! let report = build_plugin(&invocation, &config)?;
//! println!("installed into {}", report.install_root.display());
//! ```

pub mod assets;
pub mod cargo;
pub mod config;
pub mod invocation;
pub mod orchestrator;
pub mod output;
pub mod platform;
pub mod preflight;

pub use config::BuildConfig;
pub use invocation::Invocation;
pub use orchestrator::{build_plugin, BuildReport};
