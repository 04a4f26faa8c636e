//! Key bindings and the stack of active key contexts.

use std::collections::HashMap;

use crate::commands::{CommandContext, CommandError, CommandRegistry};
use crate::logger::Logger;

/// Context whose bindings apply when the active context has none for a key.
pub const GLOBAL_CONTEXT: &str = "global";

/// Key to command-string bindings, grouped by context.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    contexts: HashMap<String, HashMap<String, String>>,
}

impl KeyBindings {
    pub fn new(contexts: HashMap<String, HashMap<String, String>>) -> Self {
        Self { contexts }
    }

    pub fn bind(&mut self, context: &str, key: &str, command: &str) {
        self.contexts
            .entry(context.to_string())
            .or_default()
            .insert(key.to_string(), command.to_string());
    }

    /// Command bound to `key` in `context`, falling back to the global context.
    pub fn lookup(&self, context: &str, key: &str) -> Option<&str> {
        self.contexts
            .get(context)
            .and_then(|keys| keys.get(key))
            .or_else(|| self.contexts.get(GLOBAL_CONTEXT)?.get(key))
            .map(String::as_str)
    }
}

/// Stack of key contexts; the top one is active. The root is never popped.
#[derive(Debug, Clone)]
pub struct ContextStack {
    stack: Vec<String>,
}

impl ContextStack {
    pub fn new(root: &str) -> Self {
        Self {
            stack: vec![root.to_string()],
        }
    }

    pub fn push(&mut self, context: &str) {
        self.stack.push(context.to_string());
    }

    pub fn pop(&mut self) -> Option<String> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &str {
        self.stack.last().map(String::as_str).unwrap_or(GLOBAL_CONTEXT)
    }

    /// Replace the active context, keeping the root when only it is left.
    pub fn replace_top(&mut self, context: &str) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.push(context);
    }
}

/// Run the command bound to `key` in the active context.
///
/// Returns `Ok(false)` when nothing is bound, so the caller can pass the key on.
pub fn dispatch_key(
    registry: &CommandRegistry,
    stack: &ContextStack,
    bindings: &KeyBindings,
    logger: &dyn Logger,
    key: &str,
) -> Result<bool, CommandError> {
    let active = stack.current();
    let Some(command) = bindings.lookup(active, key) else {
        return Ok(false);
    };

    let ctx = CommandContext::new(logger).with_page(active);
    registry.execute(&ctx, command)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::BufferLogger;

    fn bindings() -> KeyBindings {
        let mut bindings = KeyBindings::default();
        bindings.bind(GLOBAL_CONTEXT, "q", "quit");
        bindings.bind(GLOBAL_CONTEXT, "d", "echo global");
        bindings.bind("queue", "d", "echo 'queue d'");
        bindings.bind("queue", "x", "missing");
        bindings
    }

    #[test]
    fn lookup_prefers_active_context() {
        let bindings = bindings();
        assert_eq!(bindings.lookup("queue", "d"), Some("echo 'queue d'"));
        assert_eq!(bindings.lookup("browser", "d"), Some("echo global"));
        assert_eq!(bindings.lookup("queue", "q"), Some("quit"));
        assert_eq!(bindings.lookup("queue", "z"), None);
    }

    #[test]
    fn stack_never_pops_root() {
        let mut stack = ContextStack::new("browser");
        stack.push("queue");
        assert_eq!(stack.current(), "queue");
        assert_eq!(stack.pop().as_deref(), Some("queue"));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.current(), "browser");
    }

    #[test]
    fn replace_top_keeps_root() {
        let mut stack = ContextStack::new("browser");
        stack.replace_top("queue");
        stack.replace_top("search");
        assert_eq!(stack.current(), "search");
        stack.pop();
        assert_eq!(stack.current(), "browser");
    }

    #[test]
    fn dispatch_runs_bound_command_with_active_page() {
        let mut registry = CommandRegistry::new();
        registry.register("echo", |ctx, args| {
            ctx.logger.printf(format_args!(
                "{}: {}",
                ctx.current_page.unwrap_or("-"),
                args.join(" ")
            ));
            Ok(())
        });
        let logger = BufferLogger::default();
        let mut stack = ContextStack::new("browser");
        stack.push("queue");

        let handled = dispatch_key(&registry, &stack, &bindings(), &logger, "d").unwrap();
        assert!(handled);
        assert_eq!(logger.contents(), "queue: queue d\n");
    }

    #[test]
    fn dispatch_unbound_key_passes_through() {
        let registry = CommandRegistry::new();
        let logger = BufferLogger::default();
        let stack = ContextStack::new("browser");

        let handled = dispatch_key(&registry, &stack, &bindings(), &logger, "z").unwrap();
        assert!(!handled);
    }

    #[test]
    fn dispatch_reports_unknown_command() {
        let registry = CommandRegistry::new();
        let logger = BufferLogger::default();
        let mut stack = ContextStack::new("browser");
        stack.push("queue");

        let err = dispatch_key(&registry, &stack, &bindings(), &logger, "x").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.command_name(), "missing");
    }
}
