//! Part-of-speech tagger: lookup table, suffix rules, orthographic fallback.

use rustc_hash::FxHashMap;

use crate::api::error::LangResult;
use crate::api::types::TaggerData;
use crate::core::doc::Doc;
use crate::core::lex;
use crate::spi::contract::Pipe;

/// Fine tags every model gets for free; the package `tag_map` overrides.
const BASE_TAG_MAP: &[(&str, &str)] = &[
    (".", "PUNCT"),
    (",", "PUNCT"),
    (":", "PUNCT"),
    ("CD", "NUM"),
    ("NN", "NOUN"),
    ("NNS", "NOUN"),
    ("NNP", "PROPN"),
    ("NNPS", "PROPN"),
    ("VB", "VERB"),
    ("VBD", "VERB"),
    ("VBG", "VERB"),
    ("VBN", "VERB"),
    ("VBP", "VERB"),
    ("VBZ", "VERB"),
    ("MD", "AUX"),
    ("JJ", "ADJ"),
    ("JJR", "ADJ"),
    ("JJS", "ADJ"),
    ("RB", "ADV"),
    ("RBR", "ADV"),
    ("RBS", "ADV"),
    ("DT", "DET"),
    ("IN", "ADP"),
    ("PRP", "PRON"),
    ("PRP$", "PRON"),
    ("CC", "CCONJ"),
    ("RP", "PART"),
    ("TO", "PART"),
    ("UH", "INTJ"),
];

pub struct Tagger {
    map: FxHashMap<String, String>,
    /// Sorted longest-suffix-first.
    suffix_rules: Vec<(String, String)>,
    tag_map: FxHashMap<String, String>,
    default_tag: String,
}

impl Tagger {
    pub fn from_data(data: TaggerData) -> Self {
        let mut suffix_rules: Vec<(String, String)> = data.suffix_rules;
        suffix_rules.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        let mut tag_map: FxHashMap<String, String> = BASE_TAG_MAP
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        tag_map.extend(data.tag_map);

        Self {
            map: data.map.into_iter().collect(),
            suffix_rules,
            tag_map,
            default_tag: data.default_tag,
        }
    }

    fn tag_of(&self, text: &str) -> String {
        if let Some(tag) = self.map.get(text) {
            return tag.clone();
        }
        if let Some(tag) = self.map.get(&text.to_lowercase()) {
            return tag.clone();
        }
        for (suffix, tag) in &self.suffix_rules {
            if text.len() > suffix.len() && text.to_lowercase().ends_with(suffix.as_str()) {
                return tag.clone();
            }
        }
        if lex::like_num(text) {
            return "CD".to_string();
        }
        if lex::is_punct(text) {
            return match text {
                "," => ",".to_string(),
                _ => ".".to_string(),
            };
        }
        if lex::is_title(text) {
            return "NNP".to_string();
        }
        self.default_tag.clone()
    }

    fn pos_of(&self, tag: &str) -> String {
        match self.tag_map.get(tag) {
            Some(pos) => pos.clone(),
            None => "X".to_string(),
        }
    }
}

impl Pipe for Tagger {
    fn name(&self) -> &str {
        "tagger"
    }

    fn assigns(&self) -> &[&str] {
        &["token.tag", "token.pos"]
    }

    fn annotate(&self, doc: &mut Doc) -> LangResult<()> {
        for token in &mut doc.tokens {
            if lex::is_space(&token.text) {
                token.tag = Some("_SP".to_string());
                token.pos = Some("SPACE".to_string());
                continue;
            }
            let tag = self.tag_of(&token.text);
            token.pos = Some(self.pos_of(&tag));
            token.tag = Some(tag);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::VocabData;
    use crate::core::tokenizer::make_doc;
    use crate::core::vocab::Vocab;

    fn tagger() -> Tagger {
        Tagger::from_data(TaggerData {
            map: [
                ("the".to_string(), "DT".to_string()),
                ("jumps".to_string(), "VBZ".to_string()),
                ("quick".to_string(), "JJ".to_string()),
                ("fox".to_string(), "NN".to_string()),
            ]
            .into(),
            suffix_rules: vec![("ing".to_string(), "VBG".to_string())],
            ..TaggerData::default()
        })
    }

    fn tagged(text: &str) -> Doc {
        let vocab = Vocab::from_data(VocabData::default());
        let mut doc = make_doc(&vocab, text);
        tagger().annotate(&mut doc).unwrap();
        doc
    }

    #[test]
    fn lookup_beats_fallback() {
        let doc = tagged("The fox jumps.");
        let tags: Vec<_> = doc.tokens.iter().map(|t| t.tag.as_deref().unwrap()).collect();
        assert_eq!(tags, vec!["DT", "NN", "VBZ", "."]);
        let pos: Vec<_> = doc.tokens.iter().map(|t| t.pos.as_deref().unwrap()).collect();
        assert_eq!(pos, vec!["DET", "NOUN", "VERB", "PUNCT"]);
    }

    #[test]
    fn suffix_rule_applies() {
        let doc = tagged("running");
        assert_eq!(doc.tokens[0].tag.as_deref(), Some("VBG"));
        assert_eq!(doc.tokens[0].pos.as_deref(), Some("VERB"));
    }

    #[test]
    fn orthographic_fallbacks() {
        let doc = tagged("Paris 1889");
        assert_eq!(doc.tokens[0].tag.as_deref(), Some("NNP"));
        assert_eq!(doc.tokens[0].pos.as_deref(), Some("PROPN"));
        assert_eq!(doc.tokens[1].tag.as_deref(), Some("CD"));
        assert_eq!(doc.tokens[1].pos.as_deref(), Some("NUM"));
    }

    #[test]
    fn unknown_word_gets_default() {
        let doc = tagged("blorple");
        assert_eq!(doc.tokens[0].tag.as_deref(), Some("NN"));
        assert_eq!(doc.tokens[0].pos.as_deref(), Some("NOUN"));
    }
}
