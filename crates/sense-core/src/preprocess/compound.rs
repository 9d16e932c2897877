use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{PreprocessError, Token};
use crate::lexicon::normalize_word;

/// Multi-word expressions, stored underscore-joined and lowercased.
#[derive(Debug, Clone, Default)]
pub struct CompoundList {
    entries: HashSet<String>,
    /// Longest compound, in words.
    max_words: usize,
}

impl CompoundList {
    pub fn new<I, S>(compounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for c in compounds {
            let c = normalize_word(c.as_ref());
            if c.is_empty() {
                continue;
            }
            list.max_words = list.max_words.max(c.split('_').count());
            list.entries.insert(c);
        }
        list
    }

    /// One compound per line; blank lines and `#` comments are skipped.
    pub fn open(path: &Path) -> Result<Self, PreprocessError> {
        let content = fs::read_to_string(path).map_err(|source| PreprocessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        ))
    }

    pub fn contains(&self, compound: &str) -> bool {
        self.entries.contains(compound)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Greedy longest-match joining of adjacent tokens.
    ///
    /// From each start position, spans from the longest candidate down to
    /// two words are tried; a match is consumed whole, otherwise the single
    /// token is kept. The merged token carries no part of speech.
    pub fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        if self.max_words < 2 || tokens.len() < 2 {
            return tokens;
        }
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let longest = self.max_words.min(tokens.len() - i);
            let matched = (2..=longest).rev().find_map(|len| {
                let span = &tokens[i..i + len];
                if span.iter().any(|t| !t.lookup) {
                    return None;
                }
                let joined = span
                    .iter()
                    .map(|t| normalize_word(&t.word))
                    .collect::<Vec<_>>()
                    .join("_");
                self.contains(&joined).then_some((len, joined))
            });
            match matched {
                Some((len, joined)) => {
                    let start = tokens[i].span.start;
                    let end = tokens[i + len - 1].span.end;
                    out.push(Token::compound(joined, start..end));
                    i += len;
                }
                None => {
                    out.push(tokens[i].clone());
                    i += 1;
                }
            }
        }
        out
    }
}
