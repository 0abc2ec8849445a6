//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the output mode
//! and the exercise inputs after config-file overrides have been applied.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use labs_config::config::{LabsConfig, load_config, load_config_file};
use labs_config::labs_dir::find_labs_dir;
use labs_core::Inputs;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Exercise inputs: coursework literals overlaid with the config file.
    pub inputs: Inputs,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Config resolution: `--config` / `LABS_CONFIG` > `.labs/config.yaml`
    /// found by walking up from the current directory > built-in defaults.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let (config_path, config) = resolve_config(global)?;

        Ok(Self {
            config_path,
            json: global.json || config.json,
            verbose: global.verbose,
            inputs: config.inputs,
        })
    }

    /// Inputs for a single run, with per-command overrides applied on top.
    pub fn inputs_with(&self, apply: impl FnOnce(&mut Inputs)) -> Inputs {
        let mut inputs = self.inputs;
        apply(&mut inputs);
        inputs
    }
}

fn resolve_config(global: &GlobalArgs) -> Result<(Option<PathBuf>, LabsConfig)> {
    if let Some(ref path) = global.config {
        let config = load_config_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?;
        return Ok((Some(path.clone()), config));
    }

    let Some(labs_dir) = env::current_dir().ok().and_then(|cwd| find_labs_dir(&cwd)) else {
        debug!("no .labs directory found, using defaults");
        return Ok((None, LabsConfig::default()));
    };

    let config = load_config(&labs_dir)
        .with_context(|| format!("failed to load config from {}", labs_dir.display()))?;
    let path = labs_dir.join(labs_config::config::CONFIG_FILE_NAME);
    Ok((path.exists().then_some(path), config))
}
