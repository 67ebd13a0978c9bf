use anyhow::{Context, Result};

use plugin_builder::{build_plugin, BuildConfig, Invocation};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = Invocation::parse(args.as_slice())?;

    let cwd = std::env::current_dir().context("resolving current directory")?;
    let config = BuildConfig::load(&cwd)?;

    let report = build_plugin(&invocation, &config)?;
    println!(
        "[plugin-build:{}] {} -> {}",
        report.platform,
        invocation.target,
        report.install_root.join("bin").display()
    );

    Ok(())
}
