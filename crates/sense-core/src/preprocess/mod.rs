//! Context normalization ahead of sense lookup.
//!
//! Raw tokens go through tag mapping (with contraction expansion),
//! compounding and stoplisting. Each resulting `Token` remembers the range
//! of input positions it covers so results can be mapped back onto the
//! caller's token sequence.

mod compound;
mod stoplist;
pub mod tags;

pub use compound::CompoundList;
pub use stoplist::Stoplist;

use std::ops::Range;
use std::path::PathBuf;

use tracing::{debug, debug_span};

use crate::sense::Pos;
use tags::{classify, expand_contraction, Expansion, TagClass};

#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid stoplist pattern {pattern:?}: {source}")]
    Regex {
        pattern: String,
        source: regex::Error,
    },
}

/// A normalized context token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text used for lexicon lookup.
    pub word: String,
    /// Coarse part of speech from the source tag, if the tag gave one.
    pub pos: Option<Pos>,
    /// False for punctuation, which is never looked up.
    pub lookup: bool,
    /// Matched the stoplist: kept in place but neither scored nor used as context.
    pub stopped: bool,
    /// Input positions this token was built from.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(word: impl Into<String>, pos: Option<Pos>, index: usize) -> Self {
        Self {
            word: word.into(),
            pos,
            lookup: true,
            stopped: false,
            span: index..index + 1,
        }
    }

    fn punctuation(word: impl Into<String>, index: usize) -> Self {
        Self {
            lookup: false,
            ..Self::new(word, None, index)
        }
    }

    pub(crate) fn compound(word: String, span: Range<usize>) -> Self {
        Self {
            word,
            pos: None,
            lookup: true,
            stopped: false,
            span,
        }
    }
}

/// Split `word/TAG` at the last slash. A token without a slash, or with an
/// empty word part, carries no tag.
pub fn split_tagged(raw: &str) -> (&str, Option<&str>) {
    match raw.rsplit_once('/') {
        Some((word, tag)) if !word.is_empty() => (word, Some(tag)),
        _ => (raw, None),
    }
}

/// The text a token falls back to when it is not disambiguated.
pub fn surface(raw: &str, tagged: bool) -> &str {
    if tagged {
        split_tagged(raw).0
    } else {
        raw
    }
}

fn is_punctuation(word: &str) -> bool {
    !word.is_empty() && !word.chars().any(char::is_alphanumeric)
}

fn map_token(raw: &str, tagged: bool, index: usize) -> Option<Token> {
    let (word, tag) = if tagged {
        split_tagged(raw)
    } else {
        (raw, None)
    };

    // clitics are only expanded when a tag says what they stand for
    if tagged && word.starts_with('\'') {
        match expand_contraction(word, tag) {
            Some(Expansion::Word(expanded, pos)) => return Some(Token::new(expanded, pos, index)),
            Some(Expansion::Dropped) => return None,
            None => {}
        }
    }

    let token = match tag.map(classify) {
        Some(Some(TagClass::Open(pos))) => Token::new(word, Some(pos), index),
        Some(Some(TagClass::Punctuation)) => Token::punctuation(word, index),
        Some(Some(TagClass::Closed)) | Some(None) => Token::new(word, None, index),
        None if is_punctuation(word) => Token::punctuation(word, index),
        None => Token::new(word, None, index),
    };
    Some(token)
}

/// Normalize one sentence of raw tokens.
///
/// Contraction clitics that expand to nothing are left out of the result;
/// their input positions are covered by no token.
pub fn preprocess<S: AsRef<str>>(
    raw: &[S],
    tagged: bool,
    compounds: Option<&CompoundList>,
    stoplist: Option<&Stoplist>,
) -> Vec<Token> {
    let _span = debug_span!("preprocess", input = raw.len(), tagged).entered();

    let mut tokens: Vec<Token> = raw
        .iter()
        .enumerate()
        .filter_map(|(i, r)| map_token(r.as_ref(), tagged, i))
        .collect();

    if let Some(compounds) = compounds {
        tokens = compounds.apply(tokens);
    }

    if let Some(stoplist) = stoplist {
        for t in tokens.iter_mut().filter(|t| t.lookup) {
            t.stopped = stoplist.is_stopped(&t.word);
        }
    }

    debug!(tokens = tokens.len());
    tokens
}
