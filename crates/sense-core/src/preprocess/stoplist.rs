use std::fs;
use std::path::Path;

use regex::RegexSet;

use super::PreprocessError;

/// Regular expressions marking words to leave out of disambiguation.
#[derive(Debug, Clone)]
pub struct Stoplist {
    set: RegexSet,
}

/// Strip the optional `/.../` delimiters around a pattern.
fn unwrap_pattern(line: &str) -> &str {
    line.strip_prefix('/')
        .and_then(|l| l.strip_suffix('/'))
        .filter(|l| !l.is_empty())
        .unwrap_or(line)
}

impl Stoplist {
    /// Patterns are matched case-insensitively against the bare word.
    pub fn new<I, S>(patterns: I) -> Result<Self, PreprocessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| format!("(?i){}", unwrap_pattern(p.as_ref().trim())))
            .collect();
        // RegexSet reports only the first failure; check individually to name it.
        for p in &patterns {
            if let Err(source) = regex::Regex::new(p) {
                return Err(PreprocessError::Regex {
                    pattern: p.trim_start_matches("(?i)").to_string(),
                    source,
                });
            }
        }
        let set = RegexSet::new(&patterns).map_err(|source| PreprocessError::Regex {
            pattern: patterns.join(" | "),
            source,
        })?;
        Ok(Self { set })
    }

    /// One pattern per line; blank lines and `#` comments are skipped.
    pub fn open(path: &Path) -> Result<Self, PreprocessError> {
        let content = fs::read_to_string(path).map_err(|source| PreprocessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    pub fn is_stopped(&self, word: &str) -> bool {
        self.set.is_match(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
