use strategos_app::config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: stdout always, plus a daily rotating file
/// under `config.dir` when one is configured.
///
/// `RUST_LOG` wins over `config.default_filter`. The returned guard flushes
/// the file writer on drop, so `main` keeps it alive until shutdown.
pub fn setup_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true);

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_thread_ids(true)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    match &config.dir {
        Some(dir) => tracing::debug!(dir, prefix = %config.file_prefix, "File logging enabled."),
        None => tracing::debug!("File logging disabled, logging to stdout only."),
    }

    guard
}
