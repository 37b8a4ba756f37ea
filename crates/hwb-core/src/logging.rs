use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{errors::Error, Result};

/// Initialize logging for the notifier: console plus a plain-text log file.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole process.
pub fn init(service_name: &str, log_file: &Path) -> Result<WorkerGuard> {
    // Default: debug for our crates, info for everything else.
    // Can be overridden with `RUST_LOG`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,hwb_core=debug,hwb_practicum=debug,hwb_telegram=debug,{service_name}=debug"
        ))
    });

    let dir = match log_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .ok_or_else(|| Error::Config(format!("invalid log file path: {}", log_file.display())))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_ansi(true))
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| Error::Config(format!("failed to install tracing subscriber: {e}")))?;

    Ok(guard)
}
