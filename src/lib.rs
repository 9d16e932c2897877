//! Word-sense disambiguation engine.
//!
//! Re-exports the engine from `sense_core` and owns process-level setup
//! shared by front ends.

pub mod trace_init;

pub use sense_core::*;
pub use trace_init::{init_tracing, TraceGuard};
