//! Built-in commands that need nothing from the host.

use crate::commands::{CommandContext, CommandRegistry, HandlerResult};

pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register("nop", |_, _| Ok(()));
    registry.register("echo", echo);
}

fn echo(ctx: &CommandContext<'_>, args: &[String]) -> HandlerResult {
    if args.is_empty() {
        return Err("no arguments provided".into());
    }
    ctx.logger.print(&args.join(" "));
    Ok(())
}

/// Register `help`, which prints the names registered so far.
///
/// Call this after population is complete; commands registered later are
/// not listed.
pub fn register_help(registry: &mut CommandRegistry) {
    let mut names = registry.list();
    if !names.iter().any(|name| name == "help") {
        names.push("help".to_string());
    }
    let listing = format_names(names);
    registry.register("help", move |ctx, _| {
        ctx.logger.print("Commands:");
        ctx.logger.print(&listing);
        Ok(())
    });
}

/// Sorted, one-per-line listing of the registered command names.
pub fn format_command_list(registry: &CommandRegistry) -> String {
    format_names(registry.list())
}

fn format_names(mut names: Vec<String>) -> String {
    names.sort();
    names
        .iter()
        .map(|name| format!("  {}", name))
        .collect::<Vec<_>>()
        .join("\n")
}
