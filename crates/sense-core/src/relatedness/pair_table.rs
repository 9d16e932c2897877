use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::{read_config, Relatedness, RelatednessError};
use crate::sense::Sense;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PairTableConfig {
    #[serde(default)]
    default: Option<f64>,
    #[serde(default, rename = "pair")]
    pairs: Vec<PairRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PairRecord {
    a: Sense,
    b: Sense,
    score: f64,
}

/// Symmetric lookup table of sense-pair scores.
///
/// Pairs missing from the table fail unless a default score is configured.
#[derive(Debug, Default)]
pub struct PairTableScorer {
    scores: HashMap<(Sense, Sense), f64>,
    default: Option<f64>,
    trace: bool,
    last_trace: String,
}

fn key(a: &Sense, b: &Sense) -> (Sense, Sense) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl PairTableScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self, RelatednessError> {
        Self::from_toml_str(&read_config(path)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RelatednessError> {
        let config: PairTableConfig =
            toml::from_str(content).map_err(|e| RelatednessError::InvalidConfig(e.to_string()))?;
        let mut scorer = Self::new();
        scorer.default = config.default;
        for p in config.pairs {
            if !p.score.is_finite() {
                return Err(RelatednessError::InvalidConfig(format!(
                    "score for {} / {} is not finite",
                    p.a, p.b
                )));
            }
            scorer.insert(&p.a, &p.b, p.score);
        }
        Ok(scorer)
    }

    pub fn insert(&mut self, a: &Sense, b: &Sense, score: f64) {
        self.scores.insert(key(a, b), score);
    }

    pub fn with_default(mut self, score: f64) -> Self {
        self.default = Some(score);
        self
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Relatedness for PairTableScorer {
    fn name(&self) -> &'static str {
        "pairs"
    }

    fn relatedness(&mut self, a: &Sense, b: &Sense) -> Result<f64, RelatednessError> {
        let result = self
            .scores
            .get(&key(a, b))
            .copied()
            .or(self.default)
            .ok_or_else(|| RelatednessError::UnknownPair(a.clone(), b.clone()));
        if self.trace {
            self.last_trace = match &result {
                Ok(score) => format!("pairs({a}, {b}) = {score}"),
                Err(_) => format!("pairs({a}, {b}) = no score"),
            };
        }
        result
    }

    fn trace_string(&self) -> &str {
        &self.last_trace
    }

    fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
        self.last_trace.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::Pos;

    fn cat() -> Sense {
        Sense::new("cat", Pos::Noun, 1)
    }

    fn dog() -> Sense {
        Sense::new("dog", Pos::Noun, 1)
    }

    #[test]
    fn lookup_is_symmetric() {
        let mut scorer = PairTableScorer::new();
        scorer.insert(&cat(), &dog(), 3.0);
        assert_eq!(scorer.relatedness(&dog(), &cat()).unwrap(), 3.0);
        assert_eq!(scorer.len(), 1);
    }

    #[test]
    fn missing_pair_fails_without_default() {
        let mut scorer = PairTableScorer::new();
        assert!(matches!(
            scorer.relatedness(&cat(), &dog()),
            Err(RelatednessError::UnknownPair(..))
        ));
        let mut scorer = PairTableScorer::new().with_default(0.5);
        assert_eq!(scorer.relatedness(&cat(), &dog()).unwrap(), 0.5);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
default = 0.0

[[pair]]
a = "cat#n#1"
b = "dog#n#1"
score = 2.5
"#;
        let mut scorer = PairTableScorer::from_toml_str(toml).unwrap();
        assert_eq!(scorer.relatedness(&cat(), &dog()).unwrap(), 2.5);
        let other = Sense::new("cat", Pos::Noun, 2);
        assert_eq!(scorer.relatedness(&other, &dog()).unwrap(), 0.0);
    }

    #[test]
    fn config_rejects_bad_sense() {
        let toml = r#"
[[pair]]
a = "cat"
b = "dog#n#1"
score = 1.0
"#;
        assert!(matches!(
            PairTableScorer::from_toml_str(toml),
            Err(RelatednessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn trace_only_when_enabled() {
        let mut scorer = PairTableScorer::new();
        scorer.insert(&cat(), &dog(), 1.0);
        scorer.relatedness(&cat(), &dog()).unwrap();
        assert_eq!(scorer.trace_string(), "");

        scorer.set_trace(true);
        scorer.relatedness(&cat(), &dog()).unwrap();
        assert_eq!(scorer.trace_string(), "pairs(cat#n#1, dog#n#1) = 1");
    }
}
