//! Rule-based dependency annotator.
//!
//! Assigns projective arcs within each sentence from coarse part-of-speech
//! evidence: the first verb (or auxiliary) anchors the sentence as root,
//! modifiers attach to the nominal that follows them, nominals attach
//! around the root. When no earlier component assigned sentence
//! boundaries, the annotator assigns them itself before parsing.

use crate::api::error::LangResult;
use crate::core::doc::{Annotation, Doc, Span};
use crate::core::sentencizer::Sentencizer;
use crate::spi::contract::Pipe;

pub struct DependencyAnnotator;

impl DependencyAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DependencyAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_nominal(pos: &str) -> bool {
    matches!(pos, "NOUN" | "PROPN" | "PRON" | "NUM")
}

fn next_nominal(pos: &[String], from: usize) -> Option<usize> {
    (from + 1..pos.len()).find(|&j| is_nominal(&pos[j]))
}

/// Nearest preceding adposition with only modifiers in between.
fn governing_adposition(pos: &[String], at: usize) -> Option<usize> {
    for j in (0..at).rev() {
        match pos[j].as_str() {
            "ADP" => return Some(j),
            "DET" | "ADJ" => continue,
            _ => return None,
        }
    }
    None
}

fn assign_arcs(doc: &mut Doc, span: Span) {
    let pos: Vec<String> = doc.tokens[span.start..span.end]
        .iter()
        .map(|t| t.pos.clone().unwrap_or_default())
        .collect();

    let root = pos
        .iter()
        .position(|p| matches!(p.as_str(), "VERB" | "AUX"))
        .or_else(|| pos.iter().position(|p| is_nominal(p)))
        .or_else(|| pos.iter().position(|p| p != "PUNCT"))
        .unwrap_or(0);

    for i in 0..pos.len() {
        let (dep, head) = if i == root {
            ("ROOT", root)
        } else {
            match pos[i].as_str() {
                "DET" => match next_nominal(&pos, i) {
                    Some(j) => ("det", j),
                    None => ("dep", root),
                },
                "ADJ" => match next_nominal(&pos, i) {
                    Some(j) => ("amod", j),
                    None => ("dep", root),
                },
                p if is_nominal(p) => {
                    if i + 1 < pos.len() && is_nominal(&pos[i + 1]) {
                        ("compound", i + 1)
                    } else if let Some(j) = governing_adposition(&pos, i) {
                        ("pobj", j)
                    } else if i < root {
                        ("nsubj", root)
                    } else {
                        ("dobj", root)
                    }
                }
                "ADP" => ("prep", root),
                "ADV" => ("advmod", root),
                "VERB" | "AUX" => ("conj", root),
                "CCONJ" => ("cc", root),
                "PUNCT" => ("punct", root),
                _ => ("dep", root),
            }
        };
        let token = &mut doc.tokens[span.start + i];
        token.dep = Some(dep.to_string());
        token.head = Some(span.start + head);
    }
}

impl Pipe for DependencyAnnotator {
    fn name(&self) -> &str {
        "parser"
    }

    fn assigns(&self) -> &[&str] {
        &["token.dep", "token.head", "token.is_sent_start"]
    }

    fn requires(&self) -> &[&str] {
        &["token.pos"]
    }

    fn annotate(&self, doc: &mut Doc) -> LangResult<()> {
        if !doc.has_annotation(Annotation::SentStart) {
            Sentencizer::default().annotate(doc)?;
        }
        for span in doc.sents() {
            assign_arcs(doc, span);
        }
        Ok(())
    }
}
