//! Pairwise sense relatedness.
//!
//! Scorers are chosen from a fixed registry (`ScorerKind`) when the engine
//! is built. A failing pair is a per-call `Err`; the engine drops it from
//! the maximum and keeps going.

mod gloss_overlap;
mod pair_table;

pub use gloss_overlap::GlossOverlapScorer;
pub use pair_table::PairTableScorer;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use crate::lexicon::LexicalDatabase;
use crate::sense::Sense;

#[derive(Debug, thiserror::Error)]
pub enum RelatednessError {
    #[error("no gloss for {0}")]
    MissingGloss(Sense),

    #[error("no score for {0} / {1}")]
    UnknownPair(Sense, Sense),

    #[error("cannot read scorer config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid scorer config: {0}")]
    InvalidConfig(String),
}

pub trait Relatedness {
    fn name(&self) -> &'static str;

    fn relatedness(&mut self, a: &Sense, b: &Sense) -> Result<f64, RelatednessError>;

    /// Diagnostic text for the most recent `relatedness` call. Empty unless
    /// tracing was switched on with `set_trace`.
    fn trace_string(&self) -> &str;

    fn set_trace(&mut self, enabled: bool);
}

/// Built-in scorers selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    /// Fixed table of pair scores (`pairs`).
    PairTable,
    /// Shared content words between glosses (`lesk`).
    GlossOverlap,
}

impl ScorerKind {
    pub const NAMES: &'static [&'static str] = &["pairs", "lesk"];

    pub fn name(self) -> &'static str {
        match self {
            ScorerKind::PairTable => "pairs",
            ScorerKind::GlossOverlap => "lesk",
        }
    }

    /// Instantiate the scorer. `config` is opaque to the engine and
    /// interpreted by the scorer itself.
    pub fn build(
        self,
        lexicon: Arc<dyn LexicalDatabase>,
        config: Option<&Path>,
    ) -> Result<Box<dyn Relatedness + Send>, RelatednessError> {
        match self {
            ScorerKind::PairTable => {
                let path = config.ok_or_else(|| {
                    RelatednessError::InvalidConfig(
                        "the pairs scorer needs a config file".to_string(),
                    )
                })?;
                Ok(Box::new(PairTableScorer::open(path)?))
            }
            ScorerKind::GlossOverlap => {
                let scorer = match config {
                    Some(path) => GlossOverlapScorer::with_config(lexicon, path)?,
                    None => GlossOverlapScorer::new(lexicon),
                };
                Ok(Box::new(scorer))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scorer {0:?}")]
pub struct UnknownScorer(pub String);

impl FromStr for ScorerKind {
    type Err = UnknownScorer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pairs" => Ok(ScorerKind::PairTable),
            "lesk" => Ok(ScorerKind::GlossOverlap),
            _ => Err(UnknownScorer(s.to_string())),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn read_config(path: &Path) -> Result<String, RelatednessError> {
    std::fs::read_to_string(path).map_err(|source| RelatednessError::Config {
        path: path.to_path_buf(),
        source,
    })
}
