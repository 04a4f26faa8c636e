//! Command system types.

use crate::logger::Logger;

use super::error::BoxError;

/// Outcome reported by a handler.
pub type HandlerResult = Result<(), BoxError>;

/// Signature of a callback implementing a command.
///
/// Handlers receive the per-invocation context and the positional arguments
/// (the command name itself is not included).
pub type CommandFn = Box<dyn Fn(&CommandContext<'_>, &[String]) -> HandlerResult>;

/// State handed to every handler invocation.
///
/// The logger is always present. Everything else is optional so that a host
/// can build a context with only what its handlers need; new fields should be
/// added as `Option`s with a matching `with_*` builder.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    /// Sink for informational and error messages.
    pub logger: &'a dyn Logger,
    /// Identifier of the currently focused page or key context.
    pub current_page: Option<&'a str>,
}

impl<'a> CommandContext<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self {
            logger,
            current_page: None,
        }
    }

    pub fn with_page(mut self, page: &'a str) -> Self {
        self.current_page = Some(page);
        self
    }
}

impl std::fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("current_page", &self.current_page)
            .finish_non_exhaustive()
    }
}
