use std::collections::HashMap;

use tracing::{debug, debug_span};

use super::coerce::coerce;
use super::senses::SenseLookup;
use super::trace::{TraceLevel, TraceLog};
use super::window::Window;
use crate::lexicon::LexicalDatabase;
use crate::preprocess::Token;
use crate::relatedness::Relatedness;
use crate::sense::{Pos, Sense};

#[derive(Debug, Clone, PartialEq)]
pub struct SenseScore {
    pub sense: Sense,
    pub total: f64,
}

/// Aggregate scores of a target's senses, in sense enumeration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    pub scores: Vec<SenseScore>,
}

/// Sums, for each target sense, the best pairwise relatedness to every
/// context word whose best clears `pair_threshold`.
pub struct Scorer<'a> {
    pub lexicon: &'a dyn LexicalDatabase,
    pub relatedness: &'a mut (dyn Relatedness + Send),
    pub trace: &'a mut TraceLog,
    pub pair_threshold: f64,
    /// Force context senses to the target's part of speech (nouns and verbs only).
    pub coerce_pos: bool,
}

impl Scorer<'_> {
    /// `None` if the target has no senses.
    pub fn score_target(
        &mut self,
        target: usize,
        window: Window,
        lookups: &[SenseLookup],
        tokens: &[Token],
    ) -> Option<ScoreTable> {
        let target_senses = lookups.get(target)?.senses()?;
        let _span = debug_span!("score_target", target, senses = target_senses.len()).entered();

        let mut coerced: HashMap<(usize, Pos), Vec<Sense>> = HashMap::new();
        let mut scores = Vec::with_capacity(target_senses.len());

        for sense in target_senses {
            let mut total = 0.0;
            for c in window.indices() {
                if c == target {
                    continue;
                }
                let Some(context) = lookups[c].senses() else {
                    continue;
                };
                let best = if self.needs_coercion(sense.pos, context) {
                    let lexicon = self.lexicon;
                    let candidates = coerced
                        .entry((c, sense.pos))
                        .or_insert_with(|| coerce(lexicon, &tokens[c].word, sense.pos));
                    self.best_pair(sense, candidates)
                } else {
                    self.best_pair(sense, context)
                };
                if let Some(best) = best {
                    if best > self.pair_threshold {
                        total += best;
                    }
                }
            }
            scores.push(SenseScore {
                sense: sense.clone(),
                total,
            });
        }

        debug!(
            best = scores
                .iter()
                .map(|s| s.total)
                .fold(f64::NEG_INFINITY, f64::max)
        );
        Some(ScoreTable { scores })
    }

    fn needs_coercion(&self, pos: Pos, context: &[Sense]) -> bool {
        self.coerce_pos
            && matches!(pos, Pos::Noun | Pos::Verb)
            && !context.iter().any(|s| s.pos == pos)
    }

    /// Highest relatedness of `sense` to any candidate. Failing pairs are
    /// skipped; `None` if every pair failed or there were no candidates.
    fn best_pair(&mut self, sense: &Sense, candidates: &[Sense]) -> Option<f64> {
        let mut best: Option<f64> = None;
        for candidate in candidates {
            let result = self.relatedness.relatedness(sense, candidate);
            if self.trace.enabled(TraceLevel::SCORER) {
                let diag = self.relatedness.trace_string();
                if !diag.is_empty() {
                    let diag = diag.to_string();
                    self.trace.push_line(&diag);
                }
            }
            match result {
                Ok(score) if !score.is_nan() => {
                    best = Some(best.map_or(score, |b| b.max(score)));
                }
                Ok(_) => {}
                Err(e) => debug!("pair skipped: {e}"),
            }
        }
        best
    }
}
