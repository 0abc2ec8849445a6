//! `labs version` -- print version, build info, and platform.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Version string. Set at compile time via Cargo.toml (workspace version).
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier. Can be overridden via environment variable at build time.
const BUILD: &str = {
    match option_env!("LABS_BUILD") {
        Some(b) => b,
        None => "dev",
    }
};

/// Execute the `labs version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    let config = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());

    if ctx.json {
        let info = serde_json::json!({
            "version": VERSION,
            "build": BUILD,
            "os": os,
            "arch": arch,
            "config": config,
        });
        return output_json(&info);
    }

    println!("labs version {} ({}) {}/{}", VERSION, BUILD, os, arch);
    if ctx.verbose {
        println!("config: {}", config.as_deref().unwrap_or("(defaults)"));
    }
    Ok(())
}
