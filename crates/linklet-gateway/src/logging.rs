use anyhow::{anyhow, Context};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global JSON-lines subscriber.
///
/// Logs are appended to `log_file` when given, else written to stdout. The
/// returned guard must be held until shutdown so buffered lines get flushed.
pub fn init(log_file: Option<&Path>, filter: &str) -> anyhow::Result<WorkerGuard> {
    let writer: Box<dyn Write + Send + Sync> = match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;

    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(guard)
}
