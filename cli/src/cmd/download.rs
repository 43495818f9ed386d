//! `download_model` verb: install a package unless it already is.
//!
//! Nothing is printed to stdout; success or failure is signaled by the exit
//! status, with progress and diagnostics on stderr.

use anyhow::{Context, Result};
use rustnlp_hub::HubApi;

pub fn run(operands: &[String]) -> Result<()> {
    let model = operands.first().context("missing model name")?;

    let api = HubApi::new();
    if api.is_installed(model) {
        return Ok(());
    }

    eprintln!("Downloading package {model} ...");
    api.download_package(model)
        .with_context(|| format!("Failed to download package: {model}"))?;
    eprintln!("Installed {model}");

    Ok(())
}
