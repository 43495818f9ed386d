//! Vocabulary: interned strings, lexeme table, stop words, and exceptions.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::api::types::VocabData;
use crate::core::strings::StringStore;

#[derive(Debug, Clone, Default)]
pub struct Vocab {
    lang: String,
    cfg: serde_json::Value,
    strings: StringStore,
    lexemes: FxHashSet<String>,
    stop_words: FxHashSet<String>,
    norm_exceptions: FxHashMap<String, String>,
    tokenizer_exceptions: FxHashMap<String, Vec<String>>,
    vector_width: usize,
}

impl Vocab {
    pub fn from_data(data: VocabData) -> Self {
        let mut strings = StringStore::new();
        let mut lexemes = FxHashSet::default();
        for lexeme in &data.lexemes {
            strings.intern(lexeme);
            lexemes.insert(lexeme.clone());
        }
        let mut stop_words = FxHashSet::default();
        for word in &data.stop_words {
            strings.intern(word);
            stop_words.insert(word.to_lowercase());
        }
        Self {
            lang: data.lang,
            cfg: data.cfg,
            strings,
            lexemes,
            stop_words,
            norm_exceptions: data.norm_exceptions.into_iter().collect(),
            tokenizer_exceptions: data.tokenizer_exceptions.into_iter().collect(),
            vector_width: data.vector_width,
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn cfg(&self) -> &serde_json::Value {
        &self.cfg
    }

    /// Number of known lexemes.
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Word-vector dimensionality; 0 when the package ships no vectors.
    pub fn vectors_length(&self) -> usize {
        self.vector_width
    }

    pub fn strings(&self) -> &StringStore {
        &self.strings
    }

    pub fn is_stop(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// A word is out-of-vocabulary when neither its exact nor lowercased
    /// form is in the lexeme table.
    pub fn is_oov(&self, word: &str) -> bool {
        !self.lexemes.contains(word) && !self.lexemes.contains(&word.to_lowercase())
    }

    /// Normalized form: exception lookup on the lowercased word, else the
    /// lowercased word itself.
    pub fn norm(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match self.norm_exceptions.get(&lower) {
            Some(norm) => norm.clone(),
            None => lower,
        }
    }

    /// Tokenizer special case for a whitespace-delimited chunk.
    pub fn tokenizer_exception(&self, chunk: &str) -> Option<&[String]> {
        self.tokenizer_exceptions.get(chunk).map(Vec::as_slice)
    }
}
