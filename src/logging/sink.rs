//! Line-oriented output sinks for user-facing diagnostics.

/// Destination for diagnostic output with a distinguished error channel.
pub trait ConsoleSink: Send + Sync {
    /// Write one line to the error channel.
    fn error_line(&self, msg: &str);
}

/// ConsoleSink writing to the process's standard error stream.
#[derive(Copy, Clone, Debug, Default)]
pub struct StderrSink;

impl ConsoleSink for StderrSink {
    fn error_line(&self, msg: &str) {
        eprintln!("{msg}");
    }
}
