//! # RustNLP Language
//!
//! Annotation-pipeline library: vocabulary, tokenizer, and the pipeline
//! components (tagger, lemmatizer, dependency annotator, sentencizer,
//! named-entity recognizer).
//!
//! Models are data packages on disk: JSON lookup tables plus configuration,
//! laid out as `meta.json` + `config.json` + `vocab.json` + optional
//! per-component lookup files.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rustnlp_lang::Language;
//!
//! let nlp = Language::load(&package_dir)?;
//! let doc = nlp.annotate("Hello world.")?;
//! assert_eq!(doc.tokens.len(), 3);
//! ```

pub mod api;
pub(crate) mod core;
pub mod spi;
mod saf;

pub use saf::*;
