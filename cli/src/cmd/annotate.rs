//! `nlp` verb: run the pipeline over a text and print the full document
//! projection as a single JSON object.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use rustnlp_hub::HubApi;
use rustnlp_lang::{lex, noun_chunks, Annotation, Doc, Language, Span, Token, Vocab};

#[derive(Serialize)]
struct DocRecord {
    text: String,
    text_with_ws: String,
    cats: std::collections::BTreeMap<String, f64>,
    is_tagged: bool,
    is_parsed: bool,
    is_nered: bool,
    is_sentenced: bool,
}

#[derive(Serialize)]
struct EntRecord {
    text: String,
    start: usize,
    end: usize,
    label: String,
}

#[derive(Serialize)]
struct SentRecord {
    start: usize,
    end: usize,
    text: String,
    tokens: Vec<TokenRecord>,
}

#[derive(Serialize)]
struct ChunkRecord {
    start: usize,
    end: usize,
}

#[derive(Serialize)]
struct TokenRecord {
    text: String,
    text_with_ws: String,
    whitespace: String,
    orth: u64,
    i: usize,
    idx: usize,
    ent_type: String,
    ent_iob: String,
    lemma: String,
    norm: String,
    lower: String,
    shape: String,
    prefix: String,
    suffix: String,
    pos: String,
    tag: String,
    dep: String,
    is_alpha: bool,
    is_ascii: bool,
    is_digit: bool,
    is_lower: bool,
    is_upper: bool,
    is_title: bool,
    is_punct: bool,
    is_left_punct: bool,
    is_right_punct: bool,
    is_space: bool,
    is_bracket: bool,
    is_currency: bool,
    like_url: bool,
    like_num: bool,
    like_email: bool,
    is_oov: bool,
    is_stop: bool,
    is_sent_start: Option<bool>,
    head: usize,
}

#[derive(Serialize)]
struct AnnotationReport {
    model: String,
    doc: DocRecord,
    ents: Vec<EntRecord>,
    sents: Vec<SentRecord>,
    noun_chunks: Vec<ChunkRecord>,
    tokens: Vec<TokenRecord>,
}

fn token_record(vocab: &Vocab, token: &Token) -> TokenRecord {
    let text = token.text.as_str();
    TokenRecord {
        text: token.text.clone(),
        text_with_ws: token.text_with_ws(),
        whitespace: token.ws.clone(),
        orth: token.orth,
        i: token.i,
        idx: token.idx,
        ent_type: token.ent_type.clone().unwrap_or_default(),
        ent_iob: token
            .ent_iob
            .map(|iob| iob.as_str().to_string())
            .unwrap_or_default(),
        lemma: token.lemma.clone().unwrap_or_default(),
        norm: token.norm.clone(),
        lower: text.to_lowercase(),
        shape: lex::shape(text),
        prefix: lex::prefix(text),
        suffix: lex::suffix(text),
        pos: token.pos.clone().unwrap_or_default(),
        tag: token.tag.clone().unwrap_or_default(),
        dep: token.dep.clone().unwrap_or_default(),
        is_alpha: lex::is_alpha(text),
        is_ascii: lex::is_ascii(text),
        is_digit: lex::is_digit(text),
        is_lower: lex::is_lower(text),
        is_upper: lex::is_upper(text),
        is_title: lex::is_title(text),
        is_punct: lex::is_punct(text),
        is_left_punct: lex::is_left_punct(text),
        is_right_punct: lex::is_right_punct(text),
        is_space: lex::is_space(text),
        is_bracket: lex::is_bracket(text),
        is_currency: lex::is_currency(text),
        like_url: lex::like_url(text),
        like_num: lex::like_num(text),
        like_email: lex::like_email(text),
        is_oov: vocab.is_oov(text),
        is_stop: vocab.is_stop(text),
        is_sent_start: token.is_sent_start,
        head: token.head.unwrap_or(token.i),
    }
}

fn build_report(model: &str, vocab: &Vocab, doc: &Doc) -> AnnotationReport {
    let ents = doc
        .ents()
        .into_iter()
        .map(|ent| EntRecord {
            text: doc.span_text(&Span {
                start: ent.start,
                end: ent.end,
            }),
            start: ent.start,
            end: ent.end,
            label: ent.label,
        })
        .collect();

    let sents = doc
        .sents()
        .into_iter()
        .map(|span| SentRecord {
            start: span.start,
            end: span.end,
            text: doc.span_text(&span),
            tokens: doc.tokens[span.start..span.end]
                .iter()
                .map(|t| token_record(vocab, t))
                .collect(),
        })
        .collect();

    let chunks = noun_chunks(doc)
        .into_iter()
        .map(|span| ChunkRecord {
            start: span.start,
            end: span.end,
        })
        .collect();

    AnnotationReport {
        model: model.to_string(),
        doc: DocRecord {
            text: doc.text.clone(),
            text_with_ws: doc.text.clone(),
            cats: doc.cats.clone(),
            is_tagged: doc.has_annotation(Annotation::Tag),
            is_parsed: doc.has_annotation(Annotation::Dep),
            is_nered: doc.has_annotation(Annotation::EntIob),
            is_sentenced: doc.has_annotation(Annotation::SentStart),
        },
        ents,
        sents,
        noun_chunks: chunks,
        tokens: doc.tokens.iter().map(|t| token_record(vocab, t)).collect(),
    }
}

pub fn run(operands: &[String]) -> Result<()> {
    let text = operands.first().context("missing text operand")?;
    let model = operands.get(1).context("missing model name")?;

    let bundle = HubApi::new()
        .get_installed(model)
        .with_context(|| format!("package not installed: {model}"))?;
    let nlp = Language::load(&bundle.package_dir)
        .with_context(|| format!("Failed to load package: {model}"))?;
    let doc = nlp.annotate(text)?;

    let report = build_report(model, nlp.vocab(), &doc);

    let mut out = std::io::stdout();
    writeln!(out, "{}", serde_json::to_string(&report)?)?;
    out.flush()?;
    Ok(())
}
