//! Log output for the `binarize` tools.
//!
//! Records go to stderr as `  12.4ms DEBUG binarize_core::trsingh: message`,
//! with the time measured from installation. Library code only uses the `log`
//! macros; binaries pick a sink with [`init_with_level`] or, under the
//! `tracing` feature, [`init_tracing`].

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, fmt::format::FmtSpan, util::SubscriberInitExt, EnvFilter};

/// Filter used by [`init_tracing`] when `RUST_LOG` is unset.
#[cfg(feature = "tracing")]
const DEFAULT_TRACING_FILTER: &str = "warn,binarize=info,binarize_core=info";

struct BinarizeLogger {
    max_level: LevelFilter,
    epoch: Instant,
}

impl BinarizeLogger {
    fn format(&self, record: &Record) -> String {
        let ms = self.epoch.elapsed().as_secs_f64() * 1e3;
        format!(
            "{ms:>8.1}ms {:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for BinarizeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.format(record);
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<BinarizeLogger> = OnceLock::new();

/// Route `log` records at or above `level` to stderr.
///
/// The first call wins; the level cannot be changed afterwards.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| BinarizeLogger {
        max_level: level,
        epoch: Instant::now(),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// `0 -> Warn`, `1 -> Info`, `2 -> Debug`, `3+ -> Trace`.
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a `tracing` subscriber on stderr, closing spans with their timing.
///
/// `RUST_LOG` overrides the default filter.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder.compact().finish().try_init()
    };
}
