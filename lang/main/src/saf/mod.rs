//! Facade re-exports for rustnlp-lang

pub use crate::api::error::*;
pub use crate::api::types::*;
pub use crate::core::chunker::noun_chunks;
pub use crate::core::doc::{Annotation, Doc, EntitySpan, Iob, Span, Token};
pub use crate::core::language::Language;
pub use crate::core::lex;
pub use crate::core::strings::{hash_string, StringStore};
pub use crate::core::tokenizer::{make_doc, tokenize};
pub use crate::core::vocab::Vocab;
