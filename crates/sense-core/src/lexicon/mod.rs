//! Lexical database contract and an in-memory implementation.
//!
//! The engine only needs four queries: morphological analysis, sense
//! enumeration, frequency ranking and derivational links. `MemoryLexicon`
//! answers them from a TOML file; anything else (a WordNet binding, a
//! remote service) can plug in by implementing `LexicalDatabase`.

mod memory;
mod morph;
#[cfg(test)]
mod tests;

pub use memory::MemoryLexicon;

use std::io;

use crate::sense::{Form, Pos, Sense};

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown part of speech {pos:?} for {lemma:?}")]
    UnknownPos { lemma: String, pos: String },
}

pub trait LexicalDatabase: Send + Sync {
    /// Base forms of `word` that exist in the database, restricted to `pos`
    /// when given. Empty if the word is unknown.
    fn valid_forms(&self, word: &str, pos: Option<Pos>) -> Vec<Form>;

    /// Senses of a form, most frequent first.
    fn query_senses(&self, form: &Form) -> Vec<Sense>;

    /// Frequency rank of a sense; higher means more common.
    fn frequency(&self, sense: &Sense) -> u32;

    /// Senses derivationally related to any sense of `form`, across parts of speech.
    fn query_derivational(&self, form: &Form) -> Vec<Sense>;

    /// Definition text, for scorers that compare glosses.
    fn gloss(&self, _sense: &Sense) -> Option<&str> {
        None
    }
}

/// Normalize a surface word the way lexicon keys are stored.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}
