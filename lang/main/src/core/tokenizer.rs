//! Rule tokenizer: whitespace chunks, special cases, affix punctuation.
//!
//! A single space after a chunk is recorded as the preceding token's
//! trailing whitespace; any other whitespace becomes a whitespace token of
//! its own, so concatenating `text_with_ws` over all tokens reproduces the
//! input exactly.

use crate::core::doc::{Doc, Token};
use crate::core::lex;
use crate::core::strings::hash_string;
use crate::core::vocab::Vocab;

pub fn tokenize(vocab: &Vocab, text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut ci = 0;

    while ci < chars.len() {
        if chars[ci].is_whitespace() {
            let start = ci;
            while ci < chars.len() && chars[ci].is_whitespace() {
                ci += 1;
            }
            let mut run_start = start;
            if chars[start] == ' ' {
                if let Some(last) = tokens.last_mut() {
                    if last.ws.is_empty() {
                        last.ws = " ".to_string();
                        run_start += 1;
                    }
                }
            }
            if run_start < ci {
                let run: String = chars[run_start..ci].iter().collect();
                push_token(&mut tokens, vocab, &run, run_start);
            }
        } else {
            let start = ci;
            while ci < chars.len() && !chars[ci].is_whitespace() {
                ci += 1;
            }
            split_chunk(&mut tokens, vocab, &chars[start..ci], start);
        }
    }

    tokens
}

/// Tokenize and wrap in a fresh document.
pub fn make_doc(vocab: &Vocab, text: &str) -> Doc {
    Doc {
        text: text.to_string(),
        tokens: tokenize(vocab, text),
        cats: Default::default(),
    }
}

fn split_chunk(tokens: &mut Vec<Token>, vocab: &Vocab, chunk: &[char], offset: usize) {
    let chunk_str: String = chunk.iter().collect();

    // Special cases only apply when the pieces spell the chunk exactly,
    // otherwise offsets would drift.
    if let Some(pieces) = vocab.tokenizer_exception(&chunk_str) {
        if pieces.concat() == chunk_str {
            let mut at = offset;
            for piece in pieces {
                push_token(tokens, vocab, piece, at);
                at += piece.chars().count();
            }
            return;
        }
    }

    let mut lo = 0;
    let mut hi = chunk.len();

    while hi - lo > 1 && lex::is_punct_char(chunk[lo]) {
        push_token(tokens, vocab, &chunk[lo].to_string(), offset + lo);
        lo += 1;
    }

    let mut trailing = Vec::new();
    while hi - lo > 1 && lex::is_punct_char(chunk[hi - 1]) {
        hi -= 1;
        trailing.push(hi);
    }

    let core: String = chunk[lo..hi].iter().collect();
    push_token(tokens, vocab, &core, offset + lo);

    for &at in trailing.iter().rev() {
        push_token(tokens, vocab, &chunk[at].to_string(), offset + at);
    }
}

fn push_token(tokens: &mut Vec<Token>, vocab: &Vocab, text: &str, idx: usize) {
    let i = tokens.len();
    tokens.push(Token {
        text: text.to_string(),
        ws: String::new(),
        i,
        idx,
        orth: hash_string(text),
        norm: vocab.norm(text),
        lemma: None,
        tag: None,
        pos: None,
        dep: None,
        head: None,
        ent_type: None,
        ent_iob: None,
        is_sent_start: None,
    });
}
