use color_eyre::{eyre::WrapErr, Result};
use tracing::metadata::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};
use xdg::BaseDirectories;

/// Sets up logging to an hourly-rolled file in the XDG state directory.
///
/// Returns a `WorkerGuard` which ensures that buffered logs are flushed to
/// their output in the case of abrupt terminations of a process.
///
/// # Errors
///
/// Returns an error if the environment filter could not be built or if the XDG
/// base directories could not be retrieved.
pub fn init() -> Result<WorkerGuard> {
    tracing_log::LogTracer::init().wrap_err("failed to install the log bridge")?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .wrap_err("failed to build env filter")?;

    let log_folder = BaseDirectories::with_prefix("botlog")
        .wrap_err("failed to get XDG base directories")?
        .get_state_home(); // usually this will be ~/.local/state/botlog
    let file_appender = tracing_appender::rolling::hourly(log_folder, "botlog.log");
    let (file_appender, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    let subscriber = Registry::default().with(env_filter).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(guard)
}
