//! Pipeline loading and execution.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use crate::api::error::{LangError, LangResult};
use crate::api::types::{ModelMeta, PipeMeta, PipelineConfig, VocabData};
use crate::core::doc::Doc;
use crate::core::lemmatizer::Lemmatizer;
use crate::core::ner::EntityRecognizer;
use crate::core::parser::DependencyAnnotator;
use crate::core::sentencizer::Sentencizer;
use crate::core::tagger::Tagger;
use crate::core::tokenizer;
use crate::core::vocab::Vocab;
use crate::spi::contract::Pipe;

/// A loaded model package: vocabulary plus an ordered annotation pipeline.
pub struct Language {
    vocab: Vocab,
    meta: ModelMeta,
    config: PipelineConfig,
    path: PathBuf,
    pipeline: Vec<Box<dyn Pipe>>,
}

impl Language {
    /// Load a model package from its directory.
    pub fn load(dir: &Path) -> LangResult<Self> {
        let config: PipelineConfig = read_required(dir, "config.json")?;
        let meta: ModelMeta = read_required(dir, "meta.json")?;

        let mut vocab_data: VocabData = read_optional(dir, "vocab.json")?;
        if vocab_data.lang.is_empty() {
            vocab_data.lang = config.nlp.lang.clone();
        }
        let vocab = Vocab::from_data(vocab_data);

        let mut pipeline: Vec<Box<dyn Pipe>> = Vec::new();
        for name in &config.nlp.pipeline {
            if config.nlp.disabled.contains(name) {
                debug!("skipping disabled component {name}");
                continue;
            }
            pipeline.push(build_component(name, dir, &config)?);
        }

        debug!(
            "loaded package {} v{} with pipes [{}]",
            meta.name,
            meta.version,
            pipeline
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            vocab,
            meta,
            config,
            path: dir.to_path_buf(),
            pipeline,
        })
    }

    /// Run the pipeline over a text.
    pub fn annotate(&self, text: &str) -> LangResult<Doc> {
        let length = text.chars().count();
        if length > self.max_length() {
            return Err(LangError::TextTooLong {
                length,
                max_length: self.max_length(),
            });
        }
        let mut doc = tokenizer::make_doc(&self.vocab, text);
        for pipe in &self.pipeline {
            pipe.annotate(&mut doc)?;
        }
        Ok(doc)
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the enabled pipes, in execution order.
    pub fn pipe_names(&self) -> Vec<&str> {
        self.pipeline.iter().map(|p| p.name()).collect()
    }

    /// All configured component names, including disabled ones.
    pub fn component_names(&self) -> Vec<&str> {
        self.config.nlp.pipeline.iter().map(String::as_str).collect()
    }

    pub fn disabled(&self) -> &[String] {
        &self.config.nlp.disabled
    }

    /// What each enabled pipe reads and writes.
    pub fn pipe_meta(&self) -> BTreeMap<String, PipeMeta> {
        self.pipeline
            .iter()
            .map(|p| {
                (
                    p.name().to_string(),
                    PipeMeta {
                        assigns: p.assigns().iter().map(|s| s.to_string()).collect(),
                        requires: p.requires().iter().map(|s| s.to_string()).collect(),
                    },
                )
            })
            .collect()
    }

    /// Per-component config blocks for every configured component.
    pub fn pipe_configs(&self) -> BTreeMap<String, serde_json::Value> {
        self.config
            .nlp
            .pipeline
            .iter()
            .map(|name| {
                let block = self
                    .config
                    .components
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
                (name.clone(), block)
            })
            .collect()
    }

    pub fn max_length(&self) -> usize {
        self.config.nlp.max_length
    }

    pub fn batch_size(&self) -> usize {
        self.config.nlp.batch_size
    }
}

fn build_component(
    name: &str,
    dir: &Path,
    config: &PipelineConfig,
) -> LangResult<Box<dyn Pipe>> {
    let pipe: Box<dyn Pipe> = match name {
        "tagger" => Box::new(Tagger::from_data(read_optional(dir, "tagger.json")?)),
        "lemmatizer" => Box::new(Lemmatizer::from_data(read_optional(
            dir,
            "lemmatizer.json",
        )?)),
        "parser" => Box::new(DependencyAnnotator::new()),
        "sentencizer" | "senter" => {
            Box::new(Sentencizer::from_config(config.components.get(name))?)
        }
        "ner" => Box::new(EntityRecognizer::from_data(read_optional(
            dir, "ner.json",
        )?)),
        other => return Err(LangError::UnknownComponent(other.to_string())),
    };
    Ok(pipe)
}

fn read_required<T: DeserializeOwned>(dir: &Path, file: &str) -> LangResult<T> {
    let path = dir.join(file);
    if !path.exists() {
        return Err(LangError::MissingFile(path.display().to_string()));
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|e| LangError::Parse(format!("{file}: {e}")))
}

fn read_optional<T: DeserializeOwned + Default>(dir: &Path, file: &str) -> LangResult<T> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|e| LangError::Parse(format!("{file}: {e}")))
}
