//! The disambiguation pipeline stages.
//!
//! For each target token: enumerate senses, build an adaptive context
//! window, score every target sense against the window by summing the best
//! pairwise relatedness per context word, then pick the winner. The
//! first-sense and random schemes skip the context stages entirely.

mod coerce;
mod score;
mod select;
mod senses;
pub mod trace;
mod window;

#[cfg(test)]
pub(crate) mod testutil;
#[cfg(test)]
mod tests;

pub use coerce::coerce;
pub use score::{ScoreTable, Scorer, SenseScore};
pub use select::{first_sense, random_sense, select_winner, Scheme, UnknownScheme};
pub use senses::{enumerate_senses, SenseLookup};
pub use trace::{TraceLevel, TraceLog};
pub use window::{build_window, Window};
