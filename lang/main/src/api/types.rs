//! On-disk package formats and public metadata types
//!
//! A model package is a directory containing `meta.json`, `config.json`,
//! `vocab.json`, and optional per-component lookup files. The types here are
//! the serde definitions of those files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contents of `meta.json`: package identity and capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    pub lang: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub pipeline: Vec<String>,
    /// Labels each component can assign, keyed by component name.
    #[serde(default)]
    pub labels: BTreeMap<String, Vec<String>>,
}

/// Contents of `config.json`: the `nlp` block plus per-component config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub nlp: NlpSettings,
    #[serde(default)]
    pub components: BTreeMap<String, serde_json::Value>,
}

/// The `nlp` block of `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpSettings {
    pub lang: String,
    #[serde(default)]
    pub pipeline: Vec<String>,
    #[serde(default)]
    pub disabled: Vec<String>,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_batch_size() -> usize {
    1000
}

fn default_max_length() -> usize {
    1_000_000
}

/// Contents of `vocab.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabData {
    #[serde(default)]
    pub lang: String,
    /// Free-form vocabulary config block, reported as-is by metadata dumps.
    #[serde(default = "empty_object")]
    pub cfg: serde_json::Value,
    #[serde(default)]
    pub lexemes: Vec<String>,
    #[serde(default)]
    pub stop_words: Vec<String>,
    /// Normalization exceptions, e.g. "n't" -> "not".
    #[serde(default)]
    pub norm_exceptions: BTreeMap<String, String>,
    /// Tokenizer special cases, e.g. "don't" -> ["do", "n't"].
    #[serde(default)]
    pub tokenizer_exceptions: BTreeMap<String, Vec<String>>,
    /// Word-vector dimensionality; 0 when the package ships no vectors.
    #[serde(default)]
    pub vector_width: usize,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Default for VocabData {
    fn default() -> Self {
        Self {
            lang: String::new(),
            cfg: empty_object(),
            lexemes: Vec::new(),
            stop_words: Vec::new(),
            norm_exceptions: BTreeMap::new(),
            tokenizer_exceptions: BTreeMap::new(),
            vector_width: 0,
        }
    }
}

/// Contents of `tagger.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerData {
    /// Exact / lowercased surface-form lookup to fine tags.
    #[serde(default)]
    pub map: BTreeMap<String, String>,
    /// Suffix rules, tried longest-suffix-first.
    #[serde(default)]
    pub suffix_rules: Vec<(String, String)>,
    /// Fine tag to coarse part-of-speech mapping.
    #[serde(default)]
    pub tag_map: BTreeMap<String, String>,
    #[serde(default = "default_tag")]
    pub default_tag: String,
}

fn default_tag() -> String {
    "NN".to_string()
}

impl Default for TaggerData {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
            suffix_rules: Vec::new(),
            tag_map: BTreeMap::new(),
            default_tag: default_tag(),
        }
    }
}

/// Contents of `lemmatizer.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LemmatizerData {
    /// Lowercased surface-form lookup.
    #[serde(default)]
    pub lookup: BTreeMap<String, String>,
    /// Per-POS suffix rewrites: pos -> [(suffix, replacement)].
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<(String, String)>>,
}

/// Contents of `ner.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NerData {
    #[serde(default)]
    pub patterns: Vec<EntityPattern>,
}

/// One gazetteer entry: a label and the token texts it matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPattern {
    pub label: String,
    pub pattern: Vec<String>,
}

/// What a pipe reads and writes, reported by metadata dumps.
#[derive(Debug, Clone, Serialize)]
pub struct PipeMeta {
    pub assigns: Vec<String>,
    pub requires: Vec<String>,
}
