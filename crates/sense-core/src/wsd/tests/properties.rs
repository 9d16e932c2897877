//! Property tests for window construction and winner selection.

use proptest::prelude::*;

use super::*;
use crate::sense::{Pos, Sense};

fn from_mask(known: &[bool]) -> Vec<SenseLookup> {
    known
        .iter()
        .map(|&k| {
            if k {
                SenseLookup::Senses(vec![Sense::new("w", Pos::Noun, 1)])
            } else {
                SenseLookup::Unknown
            }
        })
        .collect()
}

fn present(lookups: &[SenseLookup], range: std::ops::Range<usize>) -> usize {
    lookups[range].iter().filter(|l| !l.is_absent()).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn window_stays_in_sentence(
        known in prop::collection::vec(any::<bool>(), 1..40),
        radius in 0usize..8,
        pick in any::<prop::sample::Index>(),
    ) {
        let lookups = from_mask(&known);
        let target = pick.index(lookups.len());
        let w = build_window(target, radius, &lookups);
        prop_assert!(w.lower <= target);
        prop_assert!(target <= w.upper);
        prop_assert!(w.upper < lookups.len());
        prop_assert!(w.contains(target));
    }

    #[test]
    fn window_holds_radius_informative_words_per_side(
        known in prop::collection::vec(any::<bool>(), 1..40),
        radius in 0usize..8,
        pick in any::<prop::sample::Index>(),
    ) {
        let lookups = from_mask(&known);
        let target = pick.index(lookups.len());
        let w = build_window(target, radius, &lookups);

        let left = present(&lookups, w.lower..target);
        prop_assert_eq!(left, radius.min(present(&lookups, 0..target)));

        let right = present(&lookups, target + 1..w.upper + 1);
        prop_assert_eq!(
            right,
            radius.min(present(&lookups, target + 1..lookups.len()))
        );
    }

    #[test]
    fn winner_is_first_maximum_above_threshold(
        totals in prop::collection::vec(0.0f64..10.0, 0..12),
        threshold in 0.0f64..10.0,
    ) {
        let table = ScoreTable {
            scores: totals
                .iter()
                .enumerate()
                .map(|(i, &total)| SenseScore {
                    sense: Sense::new("w", Pos::Noun, i as u32 + 1),
                    total,
                })
                .collect(),
        };
        let qualifying: Vec<&SenseScore> =
            table.scores.iter().filter(|s| s.total >= threshold).collect();

        match select_winner(&table, threshold) {
            None => prop_assert!(qualifying.is_empty()),
            Some(w) => {
                let best = qualifying.iter().map(|s| s.total).fold(f64::MIN, f64::max);
                prop_assert_eq!(w.total, best);
                let first = qualifying.iter().find(|s| s.total == best).unwrap();
                prop_assert_eq!(&w.sense, &first.sense);
            }
        }
    }
}
