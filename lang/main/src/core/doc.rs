//! Annotated document model.
//!
//! Everything is token-underpinned: entities, sentence spans, and the
//! annotation-presence flags are all derived by scanning token attributes,
//! so "was this computed" and "computed but empty" stay distinguishable at
//! the token level while projections see empty sequences for both.

use std::collections::BTreeMap;

/// Token-level annotation layers a pipeline may have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Tag,
    Dep,
    EntIob,
    SentStart,
}

/// IOB entity-coding tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iob {
    Begin,
    Inside,
    Outside,
}

impl Iob {
    pub fn as_str(&self) -> &'static str {
        match self {
            Iob::Begin => "B",
            Iob::Inside => "I",
            Iob::Outside => "O",
        }
    }
}

/// A half-open token range within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A labeled token range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

/// The smallest annotated unit of a document.
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface form.
    pub text: String,
    /// Trailing whitespace, if any.
    pub ws: String,
    /// Position in the document.
    pub i: usize,
    /// Character offset of the first character.
    pub idx: usize,
    /// Vocabulary symbol of the surface form.
    pub orth: u64,
    /// Normalized form, assigned at tokenization time.
    pub norm: String,
    pub lemma: Option<String>,
    pub tag: Option<String>,
    pub pos: Option<String>,
    pub dep: Option<String>,
    /// Index of the syntactic head; `None` until parsed.
    pub head: Option<usize>,
    pub ent_type: Option<String>,
    pub ent_iob: Option<Iob>,
    pub is_sent_start: Option<bool>,
}

impl Token {
    pub fn text_with_ws(&self) -> String {
        format!("{}{}", self.text, self.ws)
    }
}

/// The result of running a pipeline over an input string.
#[derive(Debug, Clone, Default)]
pub struct Doc {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Category scores from a text categorizer; empty when none ran.
    pub cats: BTreeMap<String, f64>,
}

impl Doc {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any token carries the given annotation layer.
    pub fn has_annotation(&self, annotation: Annotation) -> bool {
        self.tokens.iter().any(|t| match annotation {
            Annotation::Tag => t.tag.is_some(),
            Annotation::Dep => t.dep.is_some(),
            Annotation::EntIob => t.ent_iob.is_some(),
            Annotation::SentStart => t.is_sent_start.is_some(),
        })
    }

    /// Entity spans reconstructed from the IOB token coding.
    pub fn ents(&self) -> Vec<EntitySpan> {
        let mut ents = Vec::new();
        let mut open: Option<EntitySpan> = None;
        for token in &self.tokens {
            match token.ent_iob {
                Some(Iob::Begin) => {
                    if let Some(ent) = open.take() {
                        ents.push(ent);
                    }
                    open = Some(EntitySpan {
                        start: token.i,
                        end: token.i + 1,
                        label: token.ent_type.clone().unwrap_or_default(),
                    });
                }
                Some(Iob::Inside) => {
                    if let Some(ref mut ent) = open {
                        ent.end = token.i + 1;
                    }
                }
                _ => {
                    if let Some(ent) = open.take() {
                        ents.push(ent);
                    }
                }
            }
        }
        if let Some(ent) = open {
            ents.push(ent);
        }
        ents
    }

    /// Sentence spans derived from `is_sent_start`; empty when sentence
    /// boundaries were never assigned.
    pub fn sents(&self) -> Vec<Span> {
        if !self.has_annotation(Annotation::SentStart) {
            return Vec::new();
        }
        let mut sents = Vec::new();
        let mut start = 0usize;
        for token in &self.tokens {
            if token.i > 0 && token.is_sent_start == Some(true) {
                sents.push(Span {
                    start,
                    end: token.i,
                });
                start = token.i;
            }
        }
        if start < self.tokens.len() {
            sents.push(Span {
                start,
                end: self.tokens.len(),
            });
        }
        sents
    }

    /// Text of a token span, internal whitespace preserved, trailing
    /// whitespace of the final token excluded.
    pub fn span_text(&self, span: &Span) -> String {
        let mut out = String::new();
        for token in &self.tokens[span.start..span.end] {
            if token.i + 1 == span.end {
                out.push_str(&token.text);
            } else {
                out.push_str(&token.text_with_ws());
            }
        }
        out
    }
}
