//! Structured diagnostics sink for the engine's `tracing` spans.
//!
//! With the `trace` feature, `init_tracing` writes JSON lines to
//! `sense-trace.jsonl` in the given directory. Without it, nothing is
//! installed and the engine's spans compile away.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background log writer alive. Buffered lines are flushed
/// when it is dropped, so hold it until the process is done.
#[must_use]
#[derive(Default)]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the subscriber. Only the first call has an effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    let mut worker = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "sense-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        worker = Some(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sense_core=debug")),
            )
            .init();
    });
    TraceGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> TraceGuard {
    TraceGuard::default()
}
