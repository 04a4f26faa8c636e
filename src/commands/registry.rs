//! Command registry and executor.

use std::collections::HashMap;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use log::{debug, warn};

use super::error::CommandError;
use super::tokenizer::{split_statements, tokenize};
use super::types::{CommandContext, CommandFn, HandlerResult};

/// Name to handler map plus the executor that dispatches into it.
///
/// The registry is meant to be populated once at start-up and then only read
/// by `execute`/`execute_chain`. It does no internal locking; a host that
/// wants to register handlers while commands are running must synchronize
/// access itself.
///
/// Execution is not atomic: when a command in a chain fails, the side effects
/// of the commands before it stay in place.
pub struct CommandRegistry {
    commands: HashMap<String, CommandFn>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a handler under `name`, replacing any previous handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&CommandContext<'_>, &[String]) -> HandlerResult + 'static,
    {
        let name = name.into();
        if self.commands.insert(name.clone(), Box::new(handler)).is_some() {
            debug!(target: "keycmd", "rebound command '{}'", name);
        }
    }

    /// Names of all registered commands, in no particular order.
    pub fn list(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Tokenize `command_str` and run each resulting command in order.
    ///
    /// Stops at the first unknown command or failing handler.
    pub fn execute(&self, ctx: &CommandContext<'_>, command_str: &str) -> Result<(), CommandError> {
        for command in tokenize(command_str) {
            let Some((name, args)) = command.split_first() else {
                continue;
            };

            let Some(handler) = self.commands.get(name) else {
                warn!(target: "keycmd", "command '{}' not found", name);
                return Err(CommandError::NotFound(name.clone()));
            };

            debug!(target: "keycmd", "executing '{}' with {:?}", name, args);
            handler(ctx, args).map_err(|source| CommandError::Handler {
                name: name.clone(),
                source,
            })?;
        }

        Ok(())
    }

    /// Execute several `;`-separated statements, one `execute` call each.
    ///
    /// The split honours quotes and escapes exactly like the tokenizer does,
    /// so a quoted `;` stays inside its statement.
    pub fn execute_chain(
        &self,
        ctx: &CommandContext<'_>,
        command_chain: &str,
    ) -> Result<(), CommandError> {
        for statement in split_statements(command_chain) {
            self.execute(ctx, statement)?;
        }
        Ok(())
    }

    /// Registered names resembling `input`, best match first.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &String)> = self
            .commands
            .keys()
            .filter_map(|name| matcher.fuzzy_match(name, input).map(|score| (score, name)))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.into_iter().map(|(_, name)| name.clone()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
