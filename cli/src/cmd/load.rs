//! `load` verb: package metadata as a single JSON object.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use rustnlp_hub::HubApi;
use rustnlp_lang::{Language, PipeMeta};

#[derive(Serialize)]
struct VocabSummary {
    lang: String,
    length: usize,
    vectors_length: usize,
    cfg: serde_json::Value,
}

#[derive(Serialize)]
struct LoadReport {
    pipe_names: Vec<String>,
    path: String,
    vocab: VocabSummary,
    config: serde_json::Value,
    optimizer: serde_json::Value,
    pipe_meta: BTreeMap<String, PipeMeta>,
    meta: serde_json::Value,
    pipe_configs: BTreeMap<String, serde_json::Value>,
    components: Vec<String>,
    disabled: Vec<String>,
    max_length: usize,
    batch_size: usize,
}

pub fn run(operands: &[String]) -> Result<()> {
    let model = operands.first().context("missing model name")?;

    let bundle = HubApi::new()
        .get_installed(model)
        .with_context(|| format!("package not installed: {model}"))?;
    let nlp = Language::load(&bundle.package_dir)
        .with_context(|| format!("Failed to load package: {model}"))?;

    let report = LoadReport {
        pipe_names: nlp.pipe_names().iter().map(|s| s.to_string()).collect(),
        path: nlp.path().display().to_string(),
        vocab: VocabSummary {
            lang: nlp.vocab().lang().to_string(),
            length: nlp.vocab().len(),
            vectors_length: nlp.vocab().vectors_length(),
            cfg: nlp.vocab().cfg().clone(),
        },
        config: serde_json::to_value(nlp.config())?,
        // a loaded package carries no training optimizer state
        optimizer: serde_json::Value::Null,
        pipe_meta: nlp.pipe_meta(),
        meta: serde_json::to_value(nlp.meta())?,
        pipe_configs: nlp.pipe_configs(),
        components: nlp.component_names().iter().map(|s| s.to_string()).collect(),
        disabled: nlp.disabled().to_vec(),
        max_length: nlp.max_length(),
        batch_size: nlp.batch_size(),
    };

    let mut out = std::io::stdout();
    writeln!(out, "{}", serde_json::to_string(&report)?)?;
    out.flush()?;
    Ok(())
}
