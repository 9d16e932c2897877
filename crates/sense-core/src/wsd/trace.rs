//! Human-readable trace of disambiguation decisions.
//!
//! What gets logged is selected by a bitmask: 1 = context window per
//! target, 2 = winning score, 4 = every target-sense score, 8 = the
//! scorer's own diagnostics for every pair. Bits 2 and 4 are independent;
//! with both set the full table is followed by the winner line.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use super::score::{ScoreTable, SenseScore};
use super::window::Window;
use crate::preprocess::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceLevel(u8);

impl TraceLevel {
    pub const OFF: TraceLevel = TraceLevel(0);
    pub const WINDOW: TraceLevel = TraceLevel(1);
    pub const WINNER: TraceLevel = TraceLevel(2);
    pub const SCORES: TraceLevel = TraceLevel(4);
    pub const SCORER: TraceLevel = TraceLevel(8);
    pub const ALL: TraceLevel = TraceLevel(15);

    /// `None` if `bits` has anything above bit 8 set.
    pub fn new(bits: u8) -> Option<TraceLevel> {
        (bits & !Self::ALL.0 == 0).then_some(TraceLevel(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: TraceLevel) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_off(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append-only trace buffer, drained as a unit.
#[derive(Debug, Default)]
pub struct TraceLog {
    level: TraceLevel,
    buf: String,
}

impl TraceLog {
    pub fn new(level: TraceLevel) -> Self {
        Self {
            level,
            buf: String::new(),
        }
    }

    pub fn level(&self) -> TraceLevel {
        self.level
    }

    pub fn set_level(&mut self, level: TraceLevel) {
        self.level = level;
    }

    pub fn enabled(&self, flag: TraceLevel) -> bool {
        self.level.contains(flag)
    }

    pub fn push_line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Everything logged since the previous drain.
    pub fn drain(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bit 1: the window's words with the target bracketed.
    pub fn window(&mut self, tokens: &[Token], window: Window, target: usize) {
        if !self.enabled(TraceLevel::WINDOW) {
            return;
        }
        let words: Vec<String> = window
            .indices()
            .map(|i| {
                if i == target {
                    format!("[{}]", tokens[i].word)
                } else {
                    tokens[i].word.clone()
                }
            })
            .collect();
        self.push_line(&format!(
            "Window for {}: {}",
            tokens[target].word,
            words.join(" ")
        ));
    }

    /// Bit 4: one line per target sense, aligned on the sense column.
    pub fn scores(&mut self, table: &ScoreTable) {
        if !self.enabled(TraceLevel::SCORES) {
            return;
        }
        let labels: Vec<String> = table.scores.iter().map(|s| s.sense.to_string()).collect();
        let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
        for (label, score) in labels.iter().zip(&table.scores) {
            let pad = " ".repeat(width - label.width());
            self.push_line(&format!("    {label}:{pad} {:.4}", score.total));
        }
    }

    /// Bit 2: the winning sense and its total, or `none`.
    pub fn winner(&mut self, word: &str, winner: Option<&SenseScore>) {
        if !self.enabled(TraceLevel::WINNER) {
            return;
        }
        match winner {
            Some(w) => self.push_line(&format!(
                "Winning score for {word}: {} {:.4}",
                w.sense, w.total
            )),
            None => self.push_line(&format!("Winning score for {word}: none")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::{Pos, Sense};

    #[test]
    fn level_bits() {
        let level = TraceLevel::new(6).unwrap();
        assert!(level.contains(TraceLevel::WINNER));
        assert!(level.contains(TraceLevel::SCORES));
        assert!(!level.contains(TraceLevel::WINDOW));
        assert!(!level.contains(TraceLevel::OFF));
        assert!(TraceLevel::new(16).is_none());
        assert!(TraceLevel::default().is_off());
    }

    #[test]
    fn drain_clears() {
        let mut log = TraceLog::new(TraceLevel::ALL);
        log.push_line("one");
        log.push_line("two");
        assert_eq!(log.drain(), "one\ntwo\n");
        assert!(log.is_empty());
        assert_eq!(log.drain(), "");
    }

    #[test]
    fn window_line_marks_target() {
        let tokens = vec![
            Token::new("a", None, 0),
            Token::new("wise", None, 1),
            Token::new("cat", None, 2),
        ];
        let mut log = TraceLog::new(TraceLevel::WINDOW);
        log.window(&tokens, Window { lower: 0, upper: 2 }, 2);
        assert_eq!(log.drain(), "Window for cat: a wise [cat]\n");
    }

    #[test]
    fn scores_are_aligned() {
        let table = ScoreTable {
            scores: vec![
                SenseScore {
                    sense: Sense::new("cat", Pos::Noun, 1),
                    total: 0.0,
                },
                SenseScore {
                    sense: Sense::new("cat", Pos::Noun, 10),
                    total: 2.5,
                },
            ],
        };
        let mut log = TraceLog::new(TraceLevel::SCORES);
        log.scores(&table);
        assert_eq!(
            log.drain(),
            "    cat#n#1:  0.0000\n    cat#n#10: 2.5000\n"
        );
    }

    #[test]
    fn disabled_bits_log_nothing() {
        let mut log = TraceLog::new(TraceLevel::SCORER);
        log.winner("cat", None);
        log.scores(&ScoreTable { scores: Vec::new() });
        assert!(log.is_empty());
    }
}
