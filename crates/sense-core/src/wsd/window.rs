use std::ops::RangeInclusive;

use super::senses::SenseLookup;

/// Inclusive index range of context tokens around a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub lower: usize,
    pub upper: usize,
}

impl Window {
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.lower..=self.upper
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// Context window of `radius` tokens each side of `target`, widened so
/// that every token without senses is replaced by one further out.
///
/// Each side scans from the target outward over the current window,
/// pushing its bound one step for each absent token it meets, until the
/// sentence edge. The result always lies within `[0, lookups.len() - 1]`
/// and contains `target`.
pub fn build_window(target: usize, radius: usize, lookups: &[SenseLookup]) -> Window {
    debug_assert!(target < lookups.len());
    let last = lookups.len().saturating_sub(1);
    let target = target.min(last);

    let mut lower = target.saturating_sub(radius);
    let mut upper = target.saturating_add(radius).min(last);

    let mut i = target;
    while i > lower {
        i -= 1;
        if lookups[i].is_absent() && lower > 0 {
            lower -= 1;
        }
    }

    let mut i = target;
    while i < upper {
        i += 1;
        if lookups[i].is_absent() && upper < last {
            upper += 1;
        }
    }

    Window { lower, upper }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::{Pos, Sense};

    /// `true` = token has senses.
    fn lookups(known: &[bool]) -> Vec<SenseLookup> {
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

    #[test]
    fn plain_window() {
        let l = lookups(&[true; 7]);
        assert_eq!(build_window(3, 2, &l), Window { lower: 1, upper: 5 });
    }

    #[test]
    fn clipped_at_sentence_edges() {
        let l = lookups(&[true; 4]);
        assert_eq!(build_window(0, 2, &l), Window { lower: 0, upper: 2 });
        assert_eq!(build_window(3, 5, &l), Window { lower: 0, upper: 3 });
    }

    #[test]
    fn expands_past_unknown_tokens() {
        // 0:T 1:F 2:T 3:[T] 4:F 5:F 6:T 7:T
        let l = lookups(&[true, false, true, true, false, false, true, true]);
        let w = build_window(3, 1, &l);
        // left: 2 is known, no expansion; right: 4 and 5 unknown, reach 6
        assert_eq!(w, Window { lower: 2, upper: 6 });

        let w = build_window(3, 2, &l);
        // left: 1 unknown → lower 0; right: 4, 5 unknown → upper 7
        assert_eq!(w, Window { lower: 0, upper: 7 });
    }

    #[test]
    fn expansion_stops_at_edge() {
        let l = lookups(&[false, false, true, false]);
        assert_eq!(build_window(2, 1, &l), Window { lower: 0, upper: 3 });
    }

    #[test]
    fn stopped_tokens_count_as_absent() {
        let mut l = lookups(&[true, true, true]);
        l[1] = SenseLookup::Stopped;
        assert_eq!(build_window(2, 1, &l), Window { lower: 0, upper: 2 });
    }

    #[test]
    fn zero_radius_is_target_only() {
        let l = lookups(&[false, true, false]);
        let w = build_window(1, 0, &l);
        assert_eq!(w, Window { lower: 1, upper: 1 });
        assert_eq!(w.indices().count(), 1);
    }

    #[test]
    fn single_token_sentence() {
        let l = lookups(&[false]);
        assert_eq!(build_window(0, 3, &l), Window { lower: 0, upper: 0 });
    }
}
