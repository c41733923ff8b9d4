//! Diagnostic log sink

/// Failure / diagnostic channel of the controller
pub trait LogSink: Send + Sync {
    fn log(&self, level: log::Level, message: &str);
}

/// Forwards everything to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, level: log::Level, message: &str) {
        log::log!(target: "campus_autologin", level, "{message}");
    }
}
