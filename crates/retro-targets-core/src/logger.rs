//! Per-frame diagnostics.
//!
//! A vision pipeline's logs are read by tailing stderr while frames
//! stream through, so every line carries the time since startup and the
//! module it came from:
//!
//! ```text
//!   12.345s DEBUG retro_targets_pair::pairer: x-sorted rects: [ ... ]
//! ```
//!
//! Install once at startup with `init_with_level`. [`FrameScope`] times
//! one frame's pass through the pipeline and reports it on drop.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct FrameLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for FrameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "{:8.3}s {:<5} {}: {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<FrameLogger> = OnceLock::new();

/// Install the frame logger with the provided level filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| FrameLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Times one labeled stage of a frame's pipeline run.
///
/// Logs nothing on construction; on drop it emits a single debug line
/// with the stage's wall time, so a failed or early-returning stage is
/// still accounted for.
pub struct FrameScope {
    label: &'static str,
    started: Instant,
}

impl FrameScope {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    /// Milliseconds since this scope was opened.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1e3
    }
}

impl Drop for FrameScope {
    fn drop(&mut self) {
        log::debug!(target: "frame", "{} took {:.3} ms", self.label, self.elapsed_ms());
    }
}

#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .flatten_event(true)
            .finish()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_scope_reports_monotonic_elapsed_time() {
        let scope = FrameScope::new("unit");
        let first = scope.elapsed_ms();
        assert!(first >= 0.0);
        assert!(scope.elapsed_ms() >= first);
    }
}
