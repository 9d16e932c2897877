//! The disambiguation engine.
//!
//! A `Disambiguator` owns every piece of configuration plus the mutable
//! trace buffer and output file. It processes one sentence per call:
//! preprocess, enumerate senses, then pick a sense per token with the
//! requested scheme. Results are mapped back so there is exactly one
//! `Assignment` per input token.

mod builder;
mod output;


pub use builder::{BuildError, EngineBuilder};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Serializer};
use tracing::{debug, debug_span};

use crate::lexicon::LexicalDatabase;
use crate::preprocess::{preprocess, surface, CompoundList, Stoplist, Token};
use crate::relatedness::Relatedness;
use crate::sense::Sense;
use crate::settings::Settings;
use crate::wsd::{
    build_window, enumerate_senses, first_sense, random_sense, select_winner, Scheme, Scorer,
    SenseLookup, TraceLevel, TraceLog,
};
use output::OutputLog;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cannot write to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{field} must be finite, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
}

/// Result for one input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Sense(Sense),
    /// The token's own word, tag removed: not disambiguated.
    Surface(String),
}

impl Assignment {
    pub fn sense(&self) -> Option<&Sense> {
        match self {
            Assignment::Sense(s) => Some(s),
            Assignment::Surface(_) => None,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Sense(s) => s.fmt(f),
            Assignment::Surface(w) => f.write_str(w),
        }
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-call options. Thresholds left as `None` use the engine defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub window: usize,
    pub tagged: bool,
    pub scheme: Scheme,
    pub pair_threshold: Option<f64>,
    pub context_threshold: Option<f64>,
}

impl Request {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            tagged: false,
            scheme: Scheme::Normal,
            pair_threshold: None,
            context_threshold: None,
        }
    }

    pub fn tagged(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn pair_threshold(mut self, threshold: f64) -> Self {
        self.pair_threshold = Some(threshold);
        self
    }

    pub fn context_threshold(mut self, threshold: f64) -> Self {
        self.context_threshold = Some(threshold);
        self
    }

    fn check(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("pair_threshold", self.pair_threshold),
            ("context_threshold", self.context_threshold),
        ] {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(EngineError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }
}

pub struct Disambiguator {
    lexicon: Arc<dyn LexicalDatabase>,
    scorer: Box<dyn Relatedness + Send>,
    compounds: Option<CompoundList>,
    stoplist: Option<Stoplist>,
    output: Option<OutputLog>,
    settings: Settings,
    trace: TraceLog,
    rng: StdRng,
}

impl Disambiguator {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// A request carrying the configured window and scheme.
    pub fn request(&self) -> Request {
        let d = &self.settings.disambiguation;
        Request::new(d.window).scheme(d.scheme)
    }

    pub fn trace_level(&self) -> TraceLevel {
        self.trace.level()
    }

    pub fn set_trace_level(&mut self, level: TraceLevel) {
        self.trace.set_level(level);
        self.settings.disambiguation.trace = level;
        self.scorer.set_trace(level.contains(TraceLevel::SCORER));
    }

    pub fn set_coerce_pos(&mut self, enabled: bool) {
        self.settings.disambiguation.coerce_pos = enabled;
    }

    /// Restart the random source used by the `random` and `sense1` schemes.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Everything traced since the previous drain.
    pub fn drain_trace(&mut self) -> String {
        self.trace.drain()
    }

    /// Disambiguate one sentence. The result has one entry per input token,
    /// in input order.
    pub fn disambiguate<S: AsRef<str>>(
        &mut self,
        raw: &[S],
        request: &Request,
    ) -> Result<Vec<Assignment>, EngineError> {
        let _span = debug_span!(
            "disambiguate",
            tokens = raw.len(),
            scheme = %request.scheme,
            window = request.window
        )
        .entered();
        request.check()?;

        let tokens = preprocess(
            raw,
            request.tagged,
            self.compounds.as_ref(),
            self.stoplist.as_ref(),
        );
        let lookups: Vec<SenseLookup> = {
            let _span = debug_span!("enumerate").entered();
            tokens
                .iter()
                .map(|t| enumerate_senses(self.lexicon.as_ref(), t))
                .collect()
        };

        let chosen: Vec<Option<Sense>> = match request.scheme {
            Scheme::Normal => self.by_context(&tokens, &lookups, request),
            Scheme::FirstSense => lookups
                .iter()
                .map(|l| {
                    l.senses()
                        .and_then(|s| first_sense(self.lexicon.as_ref(), s, &mut self.rng))
                })
                .collect(),
            Scheme::Random => lookups
                .iter()
                .map(|l| l.senses().and_then(|s| random_sense(s, &mut self.rng)))
                .collect(),
        };

        let mut out: Vec<Assignment> = raw
            .iter()
            .map(|r| Assignment::Surface(surface(r.as_ref(), request.tagged).to_string()))
            .collect();
        for (token, sense) in tokens.iter().zip(chosen) {
            let Some(sense) = sense else { continue };
            for i in token.span.clone() {
                out[i] = Assignment::Sense(sense.clone());
            }
        }
        debug!(resolved = out.iter().filter(|a| a.sense().is_some()).count());

        if let Some(log) = self.output.as_mut() {
            log.record(raw, &out).map_err(|source| EngineError::Output {
                path: log.path().to_path_buf(),
                source,
            })?;
        }
        Ok(out)
    }

    fn by_context(
        &mut self,
        tokens: &[Token],
        lookups: &[SenseLookup],
        request: &Request,
    ) -> Vec<Option<Sense>> {
        let d = &self.settings.disambiguation;
        let pair_threshold = request.pair_threshold.unwrap_or(d.pair_threshold);
        let context_threshold = request.context_threshold.unwrap_or(d.context_threshold);
        let coerce_pos = d.coerce_pos;

        let mut chosen = Vec::with_capacity(tokens.len());
        for target in 0..tokens.len() {
            if lookups[target].is_absent() {
                chosen.push(None);
                continue;
            }
            let window = build_window(target, request.window, lookups);
            debug!(target, lower = window.lower, upper = window.upper);
            self.trace.window(tokens, window, target);

            let table = Scorer {
                lexicon: self.lexicon.as_ref(),
                relatedness: self.scorer.as_mut(),
                trace: &mut self.trace,
                pair_threshold,
                coerce_pos,
            }
            .score_target(target, window, lookups, tokens);
            let Some(table) = table else {
                chosen.push(None);
                continue;
            };

            self.trace.scores(&table);
            let winner = select_winner(&table, context_threshold);
            self.trace.winner(&tokens[target].word, winner);
            chosen.push(winner.map(|w| w.sense.clone()));
        }
        chosen
    }
}
