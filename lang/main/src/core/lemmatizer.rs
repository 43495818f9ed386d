//! Lookup lemmatizer with per-POS suffix rewrites.

use rustc_hash::FxHashMap;

use crate::api::error::LangResult;
use crate::api::types::LemmatizerData;
use crate::core::doc::Doc;
use crate::spi::contract::Pipe;

pub struct Lemmatizer {
    lookup: FxHashMap<String, String>,
    rules: FxHashMap<String, Vec<(String, String)>>,
}

impl Lemmatizer {
    pub fn from_data(data: LemmatizerData) -> Self {
        Self {
            lookup: data.lookup.into_iter().collect(),
            rules: data.rules.into_iter().collect(),
        }
    }

    fn lemma_of(&self, text: &str, pos: Option<&str>) -> String {
        let lower = text.to_lowercase();
        if let Some(lemma) = self.lookup.get(&lower) {
            return lemma.clone();
        }
        if let Some(rules) = pos.and_then(|p| self.rules.get(p)) {
            for (suffix, replacement) in rules {
                if let Some(stem) = lower.strip_suffix(suffix.as_str()) {
                    // Rewrites must leave a plausible stem behind.
                    if stem.chars().count() >= 2 {
                        return format!("{stem}{replacement}");
                    }
                }
            }
        }
        text.to_string()
    }
}

impl Pipe for Lemmatizer {
    fn name(&self) -> &str {
        "lemmatizer"
    }

    fn assigns(&self) -> &[&str] {
        &["token.lemma"]
    }

    fn requires(&self) -> &[&str] {
        &["token.pos"]
    }

    fn annotate(&self, doc: &mut Doc) -> LangResult<()> {
        for token in &mut doc.tokens {
            token.lemma = Some(self.lemma_of(&token.text, token.pos.as_deref()));
        }
        Ok(())
    }
}
