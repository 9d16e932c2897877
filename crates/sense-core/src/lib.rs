//! Word-sense disambiguation.
//!
//! Given a sentence of (optionally part-of-speech tagged) tokens, the
//! engine assigns each content word the sense from a lexical database that
//! is most related to its neighbours, as judged by a pluggable relatedness
//! scorer.

pub mod engine;
pub mod lexicon;
pub mod preprocess;
pub mod relatedness;
pub mod sense;
pub mod settings;
pub mod wsd;

pub use engine::{Assignment, BuildError, Disambiguator, EngineBuilder, EngineError, Request};
pub use sense::{Form, Pos, Sense};
pub use wsd::{Scheme, TraceLevel};
