use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Console verbosity follows the `-v`/`-q` flags; the trace file, when
/// requested, always captures everything.
pub fn configure_tracing(trace: Option<PathBuf>, verbosity: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let console_filter = verbosity.log_level_filter().as_trace();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    match trace {
        Some(path) => {
            let trace_file = File::create(&path)
                .with_context(|| format!("Creating trace file. path: {}", path.display()))?;

            let trace_layer = tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(trace_file))
                .with_ansi(false)
                .with_filter(LevelFilter::TRACE);

            tracing_subscriber::registry()
                .with(console_layer)
                .with(trace_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(console_layer)
                .init();
        }
    }

    Ok(())
}
