//! Command parsing and dispatch.
//!
//! A raw command string (bound to a key or typed by the user) is tokenized
//! into a chain of commands, each command name is looked up in the registry
//! and its handler is called with the caller's context. The first failure
//! stops the chain.
//!
//! # Architecture
//!
//! - `tokenizer`: raw string to chain of token lists
//! - `registry`: name to handler map, executor and chain executor
//! - `types`: context and handler types
//! - `error`: executor errors

mod error;
mod registry;
mod tokenizer;
mod types;

pub use error::{BoxError, CommandError};
pub use registry::CommandRegistry;
pub use tokenizer::{ParsedCommand, split_statements, tokenize};
pub use types::{CommandContext, CommandFn, HandlerResult};
