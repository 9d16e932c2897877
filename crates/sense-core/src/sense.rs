//! Structured sense identifiers.
//!
//! A sense is addressed by lemma, part of speech and a 1-based index that
//! orders the lemma's senses by frequency. The `word#pos#index` string form
//! exists for display and file formats only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Coarse part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    /// One-letter code used in `word#pos#index`.
    pub fn code(self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adjective => 'a',
            Pos::Adverb => 'r',
        }
    }

    /// Parse a one-letter code. `s` (satellite adjective) folds into `a`.
    pub fn from_code(code: &str) -> Option<Pos> {
        match code {
            "n" => Some(Pos::Noun),
            "v" => Some(Pos::Verb),
            "a" | "s" => Some(Pos::Adjective),
            "r" => Some(Pos::Adverb),
            _ => None,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SenseParseError {
    #[error("expected word#pos#index, got {0:?}")]
    Shape(String),
    #[error("unknown part of speech {0:?}")]
    Pos(String),
    #[error("invalid sense index {0:?}")]
    Index(String),
}

/// A lemma restricted to one part of speech (`word#pos`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Form {
    pub lemma: String,
    pub pos: Pos,
}

impl Form {
    pub fn new(lemma: impl Into<String>, pos: Pos) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.lemma, self.pos)
    }
}

/// One dictionary meaning of a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sense {
    pub lemma: String,
    pub pos: Pos,
    /// 1-based, most frequent first.
    pub index: u32,
}

impl Sense {
    pub fn new(lemma: impl Into<String>, pos: Pos, index: u32) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            index,
        }
    }

    pub fn form(&self) -> Form {
        Form::new(self.lemma.clone(), self.pos)
    }

    pub fn is_form(&self, form: &Form) -> bool {
        self.pos == form.pos && self.lemma == form.lemma
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}#{}", self.lemma, self.pos, self.index)
    }
}

impl FromStr for Sense {
    type Err = SenseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, '#');
        let (Some(index), Some(pos), Some(lemma)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(SenseParseError::Shape(s.to_string()));
        };
        if lemma.is_empty() {
            return Err(SenseParseError::Shape(s.to_string()));
        }
        let pos = Pos::from_code(pos).ok_or_else(|| SenseParseError::Pos(pos.to_string()))?;
        let index: u32 = index
            .parse()
            .ok()
            .filter(|&i| i > 0)
            .ok_or_else(|| SenseParseError::Index(index.to_string()))?;
        Ok(Sense::new(lemma, pos, index))
    }
}

impl Serialize for Sense {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sense {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
