use crate::result::PageTreeResult;
use tracing::Level;

/// Installs a formatting subscriber; `log` records are forwarded through `tracing-log`.
///
/// Calling this again after a subscriber is in place does nothing.
pub fn init_logging() -> PageTreeResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(Level::DEBUG)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing_log::LogTracer::init()?;
    }
    Ok(())
}
