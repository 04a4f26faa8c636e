//! Host-side session state and the commands that drive it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::commands::{CommandContext, CommandRegistry, HandlerResult};
use crate::config::Config;
use crate::keymap::ContextStack;

#[derive(Debug)]
struct SessionState {
    pages: Vec<String>,
    contexts: ContextStack,
    should_quit: bool,
}

/// Shared handle on the session; handlers hold clones of it.
#[derive(Debug, Clone)]
pub struct Session {
    state: Rc<RefCell<SessionState>>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let mut pages = config.pages.clone();
        if !config.has_page(&config.default_page) {
            pages.insert(0, config.default_page.clone());
        }

        Self {
            state: Rc::new(RefCell::new(SessionState {
                pages,
                contexts: ContextStack::new(&config.default_page),
                should_quit: false,
            })),
        }
    }

    pub fn current_page(&self) -> String {
        self.state.borrow().contexts.current().to_string()
    }

    /// Snapshot of the key context stack, safe to hold while commands run.
    pub fn context_stack(&self) -> ContextStack {
        self.state.borrow().contexts.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.borrow().should_quit
    }

    pub fn show_page(&self, name: &str) -> HandlerResult {
        let mut state = self.state.borrow_mut();
        if !state.pages.iter().any(|p| p == name) {
            return Err(format!("unknown page '{}'", name).into());
        }
        state.contexts.replace_top(name);
        Ok(())
    }

    pub fn quit(&self) {
        self.state.borrow_mut().should_quit = true;
    }

    fn print_pages(&self, ctx: &CommandContext<'_>) {
        let state = self.state.borrow();
        let current = state.contexts.current();
        for page in &state.pages {
            let marker = if page == current { "*" } else { " " };
            ctx.logger.printf(format_args!("{} {}", marker, page));
        }
    }

    pub fn register_commands(&self, registry: &mut CommandRegistry) {
        let session = self.clone();
        registry.register("show-page", move |_, args| {
            let Some(page) = args.first() else {
                return Err("missing page argument".into());
            };
            session.show_page(page)
        });

        let session = self.clone();
        registry.register("quit", move |_, _| {
            session.quit();
            Ok(())
        });

        let session = self.clone();
        registry.register("pages", move |ctx, _| {
            session.print_pages(ctx);
            Ok(())
        });
    }
}
