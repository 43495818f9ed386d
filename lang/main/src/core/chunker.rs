//! Noun chunk detection
//!
//! Identifies base noun phrases by pattern matching on coarse POS tags.
//! Pattern: (DET)? (ADJ)* (NOUN|PROPN)+
//!
//! Not a pipeline component: chunks are computed on demand, and only when
//! the document carries both tag and dependency annotation. Without those
//! prerequisites the result is empty.

use crate::core::doc::{Annotation, Doc, Span};

fn pos_at(doc: &Doc, i: usize) -> &str {
    doc.tokens[i].pos.as_deref().unwrap_or("")
}

fn is_chunk_noun(pos: &str) -> bool {
    matches!(pos, "NOUN" | "PROPN")
}

/// Extract noun chunks as token spans, sentence by sentence.
pub fn noun_chunks(doc: &Doc) -> Vec<Span> {
    if !doc.has_annotation(Annotation::Tag) || !doc.has_annotation(Annotation::Dep) {
        return Vec::new();
    }

    let sentences = if doc.has_annotation(Annotation::SentStart) {
        doc.sents()
    } else {
        vec![Span {
            start: 0,
            end: doc.tokens.len(),
        }]
    };

    let mut chunks = Vec::new();
    for sent in sentences {
        let mut i = sent.start;
        while i < sent.end {
            if let Some(span) = match_noun_phrase(doc, i, sent.end) {
                i = span.end;
                chunks.push(span);
            } else {
                i += 1;
            }
        }
    }
    chunks
}

/// Try to match `(DET)? (ADJ)* (NOUN|PROPN)+` starting at position `start`.
fn match_noun_phrase(doc: &Doc, start: usize, limit: usize) -> Option<Span> {
    let mut end = start;

    if end < limit && pos_at(doc, end) == "DET" {
        end += 1;
    }

    while end < limit && pos_at(doc, end) == "ADJ" {
        end += 1;
    }

    let noun_start = end;
    while end < limit && is_chunk_noun(pos_at(doc, end)) {
        end += 1;
    }

    if end == noun_start {
        return None;
    }

    Some(Span { start, end })
}
