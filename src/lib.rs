pub mod builtins;
pub mod commands;
pub mod config;
pub mod keymap;
pub mod logger;
pub mod session;

#[cfg(test)]
pub mod test_helpers;
