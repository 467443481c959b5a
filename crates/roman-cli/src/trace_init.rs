//! Structured trace logging for `romantool`.
//!
//! The file writer is non-blocking: records sit in a worker queue until the
//! returned guard is dropped. `main` keeps the guard alive for the whole run
//! and drops it on every exit path.

use std::path::Path;

pub const TRACE_FILE_NAME: &str = "romantool-trace.jsonl";

#[cfg(feature = "trace")]
pub type TraceGuard = tracing_appender::non_blocking::WorkerGuard;

#[cfg(not(feature = "trace"))]
pub type TraceGuard = ();

/// Start writing JSON trace records to `<log_dir>/romantool-trace.jsonl`.
///
/// Returns `None` if tracing was already initialized in this process.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    use std::sync::Once;

    static INIT: Once = Once::new();

    let mut guard = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);

        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "roman_core=debug,roman_session=debug,roman_cli=debug",
                    )
                }),
            )
            .try_init();
        if installed.is_ok() {
            guard = Some(worker_guard);
        }
    });
    guard
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use std::fs;

    use super::*;
    use crate::commands::convert_ops;

    #[test]
    fn test_log_written_after_guard_drop() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_tracing(dir.path());
        assert!(guard.is_some());

        let _ = convert_ops::to_roman_cmd(1994);
        let _ = convert_ops::to_int_cmd("IIII");
        drop(guard);

        let log = fs::read_to_string(dir.path().join(TRACE_FILE_NAME)).unwrap();
        assert!(!log.is_empty());
        assert!(log.contains("integer_to_roman"));
        assert!(log.contains("not canonical"));
        for line in log.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }
}
