use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::{read_config, Relatedness, RelatednessError};
use crate::lexicon::LexicalDatabase;
use crate::sense::Sense;

/// Words that carry no meaning in a definition.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "of", "to", "in", "on", "at", "by", "for", "with", "from", "and", "or",
    "but", "not", "as", "is", "are", "was", "were", "be", "been", "being", "that", "which",
    "who", "whom", "this", "these", "those", "it", "its", "their", "his", "her", "some", "any",
    "one", "used", "usually", "especially", "etc",
];

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GlossOverlapConfig {
    #[serde(default)]
    stopwords: Vec<String>,
}

/// Counts distinct content words shared by two glosses.
pub struct GlossOverlapScorer {
    lexicon: Arc<dyn LexicalDatabase>,
    stopwords: HashSet<String>,
    trace: bool,
    last_trace: String,
}

impl GlossOverlapScorer {
    pub fn new(lexicon: Arc<dyn LexicalDatabase>) -> Self {
        Self {
            lexicon,
            stopwords: FUNCTION_WORDS.iter().map(|s| s.to_string()).collect(),
            trace: false,
            last_trace: String::new(),
        }
    }

    /// Built-in function words plus the config file's `stopwords`.
    pub fn with_config(
        lexicon: Arc<dyn LexicalDatabase>,
        path: &Path,
    ) -> Result<Self, RelatednessError> {
        let config: GlossOverlapConfig = toml::from_str(&read_config(path)?)
            .map_err(|e| RelatednessError::InvalidConfig(e.to_string()))?;
        let mut scorer = Self::new(lexicon);
        scorer
            .stopwords
            .extend(config.stopwords.into_iter().map(|w| w.to_lowercase()));
        Ok(scorer)
    }

    fn content_words(&self, sense: &Sense) -> Result<BTreeSet<String>, RelatednessError> {
        let gloss = self
            .lexicon
            .gloss(sense)
            .ok_or_else(|| RelatednessError::MissingGloss(sense.clone()))?;
        Ok(gloss
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.contains(w))
            .collect())
    }
}

impl Relatedness for GlossOverlapScorer {
    fn name(&self) -> &'static str {
        "lesk"
    }

    fn relatedness(&mut self, a: &Sense, b: &Sense) -> Result<f64, RelatednessError> {
        let words_a = self.content_words(a);
        let words_b = self.content_words(b);
        let (words_a, words_b) = match (words_a, words_b) {
            (Ok(x), Ok(y)) => (x, y),
            (Err(e), _) | (_, Err(e)) => {
                if self.trace {
                    self.last_trace = format!("lesk({a}, {b}): {e}");
                }
                return Err(e);
            }
        };
        let shared: Vec<&String> = words_a.intersection(&words_b).collect();
        if self.trace {
            let list: Vec<&str> = shared.iter().map(|s| s.as_str()).collect();
            self.last_trace = format!("lesk({a}, {b}) = {} [{}]", shared.len(), list.join(" "));
        }
        Ok(shared.len() as f64)
    }

    fn trace_string(&self) -> &str {
        &self.last_trace
    }

    fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
        self.last_trace.clear();
    }
}
