use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::trace;
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Console output goes to stderr, filtered by the verbosity flags (or `RUST_LOG`).
///
/// When a trace file is given everything is also written to it, regardless of verbosity.
pub fn configure_tracing(trace: Option<PathBuf>, verbose: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(
            verbose
                .log_level_filter()
                .as_trace()
                .into(),
        )
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(console_filter);

    let trace_layer = match &trace {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Creating trace log. file: {}", path.display()))?;

            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_filter(LevelFilter::TRACE),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(trace_layer)
        .try_init()?;

    trace!("Tracing configured. trace: {:?}", trace);

    Ok(())
}
