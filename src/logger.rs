//! Warning sink handed to the resolver by its caller.
//!
//! The resolver never changes its result based on the logger, so a caller
//! with no diagnostics story can pass [`NullLogger`].

/// Receives non-fatal warnings such as unrecognized launch arguments.
pub trait Logger {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn warn(&self, _message: &str) {}
}
