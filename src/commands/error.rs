//! Errors surfaced by the executor.

/// Boxed error returned by handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single `execute`/`execute_chain` call.
///
/// Only the first failure of a chain is reported; commands after it are not run.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// No handler is registered under this name.
    #[error("Command '{0}' not found")]
    NotFound(String),
    /// A registered handler reported failure.
    #[error("Error executing command '{name}': {source}")]
    Handler {
        name: String,
        #[source]
        source: BoxError,
    },
}

impl CommandError {
    /// Name of the command that failed.
    pub fn command_name(&self) -> &str {
        match self {
            CommandError::NotFound(name) => name,
            CommandError::Handler { name, .. } => name,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CommandError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_command() {
        let err = CommandError::NotFound("nonexistent".to_string());
        assert_eq!(err.to_string(), "Command 'nonexistent' not found");
        assert_eq!(err.command_name(), "nonexistent");
        assert!(err.is_not_found());
    }

    #[test]
    fn handler_failure_wraps_source() {
        let err = CommandError::Handler {
            name: "seek".to_string(),
            source: "missing seek time argument".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error executing command 'seek': missing seek time argument"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("missing seek time argument"));
        assert!(!err.is_not_found());
    }
}
