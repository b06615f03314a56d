//! User-facing notices, shown as toasts and mirrored to the log.

use crate::components::{ToastOptions, Toasts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Raise a toast for `message`. Errors are also logged at `warn`.
pub fn notify(toasts: &Toasts, level: Level, message: &str) {
    let options = ToastOptions::new();
    let title = message.to_string();
    match level {
        Level::Info => {
            tracing::debug!("{}", message);
            toasts.info(title, options);
        }
        Level::Success => {
            tracing::debug!("{}", message);
            toasts.success(title, options);
        }
        Level::Warning => {
            tracing::info!("{}", message);
            toasts.warning(title, options);
        }
        Level::Error => {
            tracing::warn!("{}", message);
            toasts.error(title, options);
        }
    }
}
