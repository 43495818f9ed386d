//! Punctuation-driven sentence boundary assignment.

use rustc_hash::FxHashSet;

use crate::api::error::{LangError, LangResult};
use crate::core::doc::Doc;
use crate::core::lex;
use crate::spi::contract::Pipe;

const DEFAULT_PUNCT_CHARS: &[char] = &['.', '!', '?', '\u{2026}'];

pub struct Sentencizer {
    punct_chars: FxHashSet<char>,
}

impl Default for Sentencizer {
    fn default() -> Self {
        Self {
            punct_chars: DEFAULT_PUNCT_CHARS.iter().copied().collect(),
        }
    }
}

impl Sentencizer {
    /// Build from the component's config block, e.g.
    /// `{"punct_chars": [".", "!", "?"]}`. An absent or empty block keeps
    /// the defaults.
    pub fn from_config(config: Option<&serde_json::Value>) -> LangResult<Self> {
        let Some(config) = config else {
            return Ok(Self::default());
        };
        let Some(chars) = config.get("punct_chars") else {
            return Ok(Self::default());
        };
        let chars: Vec<String> = serde_json::from_value(chars.clone())
            .map_err(|e| LangError::Parse(format!("sentencizer punct_chars: {e}")))?;
        Ok(Self {
            punct_chars: chars.iter().filter_map(|s| s.chars().next()).collect(),
        })
    }

    fn is_boundary_punct(&self, text: &str) -> bool {
        text.chars().all(|c| self.punct_chars.contains(&c)) && !text.is_empty()
    }
}

impl Pipe for Sentencizer {
    fn name(&self) -> &str {
        "sentencizer"
    }

    fn assigns(&self) -> &[&str] {
        &["token.is_sent_start"]
    }

    fn annotate(&self, doc: &mut Doc) -> LangResult<()> {
        let mut seen_boundary = false;
        for token in &mut doc.tokens {
            let start = if token.i == 0 {
                true
            } else if seen_boundary && !lex::is_punct(&token.text) && !lex::is_space(&token.text)
            {
                seen_boundary = false;
                true
            } else {
                false
            };
            token.is_sent_start = Some(start);
            if self.is_boundary_punct(&token.text) {
                seen_boundary = true;
            }
        }
        Ok(())
    }
}
