//! Logging capability handed to command handlers.

use std::fmt;

/// Message sink available to handlers through the command context.
pub trait Logger {
    /// Print an informational message.
    fn print(&self, message: &str);

    /// Print a formatted message, e.g. `logger.printf(format_args!("{} songs", n))`.
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.print(&args.to_string());
    }

    /// Report an error together with a label naming where it came from.
    fn print_error(&self, source: &str, err: &dyn std::error::Error);
}

/// [`Logger`] backed by the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Logger for LogSink {
    fn print(&self, message: &str) {
        log::info!(target: "keycmd", "{}", message);
    }

    fn print_error(&self, source: &str, err: &dyn std::error::Error) {
        log::error!(target: "keycmd", "Error in {}: {}", source, err);
    }
}
