//! `info` verb: library-native installation summary, plain text.

use std::io::Write;

use anyhow::Result;
use rustnlp_hub::HubApi;

pub fn run() -> Result<()> {
    let api = HubApi::new();
    let mut out = std::io::stdout();

    writeln!(out, "rustnlp v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "cache: {}", api.cache_dir().display())?;
    writeln!(out, "registry: {}", api.registry())?;

    let packages = api.installed_packages()?;
    if packages.is_empty() {
        writeln!(out, "packages: none installed")?;
    } else {
        writeln!(out, "packages:")?;
        for bundle in packages {
            let meta = bundle.load_meta().unwrap_or_default();
            writeln!(
                out,
                "  {} ({} {})",
                bundle.name,
                meta["lang"].as_str().unwrap_or("?"),
                meta["version"].as_str().unwrap_or("?"),
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
