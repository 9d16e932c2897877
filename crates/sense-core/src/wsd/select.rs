use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::score::{ScoreTable, SenseScore};
use crate::lexicon::LexicalDatabase;
use crate::sense::Sense;

/// How a sense is chosen for each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scheme {
    /// Context-based relatedness scoring.
    #[default]
    #[serde(rename = "normal")]
    Normal,
    /// Most frequent sense, ignoring context.
    #[serde(rename = "sense1")]
    FirstSense,
    /// Uniformly random sense (baseline).
    #[serde(rename = "random")]
    Random,
}

impl Scheme {
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Normal => "normal",
            Scheme::FirstSense => "sense1",
            Scheme::Random => "random",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheme {0:?} (expected normal, sense1 or random)")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Scheme::Normal),
            "sense1" => Ok(Scheme::FirstSense),
            "random" => Ok(Scheme::Random),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Highest total at or above `context_threshold`; the earliest sense wins ties.
pub fn select_winner(table: &ScoreTable, context_threshold: f64) -> Option<&SenseScore> {
    let mut winner: Option<&SenseScore> = None;
    for score in &table.scores {
        if score.total < context_threshold {
            continue;
        }
        if winner.map_or(true, |w| score.total > w.total) {
            winner = Some(score);
        }
    }
    winner
}

/// First sense of the most frequent form. Tied forms are broken at random.
pub fn first_sense<R: Rng + ?Sized>(
    lexicon: &dyn LexicalDatabase,
    senses: &[Sense],
    rng: &mut R,
) -> Option<Sense> {
    let mut heads: Vec<&Sense> = Vec::new();
    for sense in senses {
        if !heads.iter().any(|h| h.lemma == sense.lemma && h.pos == sense.pos) {
            heads.push(sense);
        }
    }
    let best = heads.iter().map(|s| lexicon.frequency(s)).max()?;
    let tied: Vec<&Sense> = heads
        .into_iter()
        .filter(|s| lexicon.frequency(s) == best)
        .collect();
    tied.choose(rng).map(|s| (*s).clone())
}

/// Any sense, uniformly.
pub fn random_sense<R: Rng + ?Sized>(senses: &[Sense], rng: &mut R) -> Option<Sense> {
    senses.choose(rng).cloned()
}
