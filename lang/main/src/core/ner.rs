//! Gazetteer named-entity recognizer.
//!
//! Patterns are label + token-text sequences, matched greedily left to
//! right, longest pattern first, without overlap. Running the recognizer
//! marks every token `O` so "annotated with no entities" is observable.

use crate::api::error::LangResult;
use crate::api::types::NerData;
use crate::core::doc::{Doc, Iob};
use crate::spi::contract::Pipe;

pub struct EntityRecognizer {
    /// Sorted longest-pattern-first.
    patterns: Vec<(String, Vec<String>)>,
}

impl EntityRecognizer {
    pub fn from_data(data: NerData) -> Self {
        let mut patterns: Vec<(String, Vec<String>)> = data
            .patterns
            .into_iter()
            .filter(|p| !p.pattern.is_empty())
            .map(|p| (p.label, p.pattern))
            .collect();
        patterns.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        Self { patterns }
    }

    fn match_at(&self, doc: &Doc, at: usize) -> Option<(usize, &str)> {
        for (label, pattern) in &self.patterns {
            if at + pattern.len() > doc.tokens.len() {
                continue;
            }
            let matched = pattern
                .iter()
                .zip(&doc.tokens[at..at + pattern.len()])
                .all(|(p, t)| p == &t.text);
            if matched {
                return Some((pattern.len(), label));
            }
        }
        None
    }
}

impl Pipe for EntityRecognizer {
    fn name(&self) -> &str {
        "ner"
    }

    fn assigns(&self) -> &[&str] {
        &["token.ent_iob", "token.ent_type"]
    }

    fn annotate(&self, doc: &mut Doc) -> LangResult<()> {
        for token in &mut doc.tokens {
            token.ent_iob = Some(Iob::Outside);
            token.ent_type = None;
        }

        let mut i = 0;
        while i < doc.tokens.len() {
            match self.match_at(doc, i) {
                Some((len, label)) => {
                    let label = label.to_string();
                    for (offset, token) in doc.tokens[i..i + len].iter_mut().enumerate() {
                        token.ent_iob = Some(if offset == 0 { Iob::Begin } else { Iob::Inside });
                        token.ent_type = Some(label.clone());
                    }
                    i += len;
                }
                None => i += 1,
            }
        }
        Ok(())
    }
}
