use clap::Parser;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use keycmd::builtins;
use keycmd::commands::{CommandContext, CommandError, CommandRegistry};
use keycmd::config::{self, Config, ConfigError};
use keycmd::keymap::{self, KeyBindings};
use keycmd::logger::{LogSink, Logger};
use keycmd::session::Session;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;
use std::path::PathBuf;

/// Run typed or key-bound commands.
#[derive(Debug, Parser)]
#[command(name = "keycmd", version)]
struct Cli {
    /// Page to start on instead of the configured default
    #[arg(long)]
    page: Option<String>,

    /// Command string to run, may be repeated; skips the interactive prompt
    #[arg(short, long = "exec", value_name = "COMMANDS")]
    exec: Vec<String>,

    /// Key to dispatch through the bindings, may be repeated; skips the interactive prompt
    #[arg(short, long = "key", value_name = "KEY")]
    keys: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

struct App {
    registry: CommandRegistry,
    session: Session,
    bindings: KeyBindings,
    logger: LogSink,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = load_config(&cli);
    if let Some(page) = &cli.page {
        config.default_page = page.clone();
    }

    let app = App::new(&config);

    for line in &config.startup {
        app.run_line(line);
    }

    if !cli.exec.is_empty() || !cli.keys.is_empty() {
        let mut ok = true;
        for line in &cli.exec {
            ok &= app.run_line(line);
        }
        for key in &cli.keys {
            ok &= app.press_key(key);
        }
        if !ok {
            std::process::exit(1);
        }
        return;
    }

    print_colored_message(
        "Type commands separated by ';'. Prefix a key with ':' to press it. 'help' lists commands.\n",
        Color::DarkMagenta,
    );

    let mut rl = Reedline::create();

    while !app.session.should_quit() {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(app.session.current_page()),
            DefaultPromptSegment::Empty,
        );

        let line = match rl.read_line(&prompt) {
            Ok(Signal::Success(input)) => input.trim().to_string(),
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) | Err(_) => break,
            Ok(_) => continue,
        };

        if line.is_empty() {
            continue;
        }

        match line.strip_prefix(':') {
            Some(key) => app.press_key(key.trim()),
            None => app.run_line(&line),
        };
    }
}

impl App {
    fn new(config: &Config) -> Self {
        let session = Session::new(config);

        let mut registry = CommandRegistry::new();
        builtins::register_builtins(&mut registry);
        session.register_commands(&mut registry);
        builtins::register_help(&mut registry);
        log::debug!("registered {} commands", registry.len());

        Self {
            registry,
            session,
            bindings: config.key_bindings(),
            logger: LogSink,
        }
    }

    fn run_line(&self, line: &str) -> bool {
        let page = self.session.current_page();
        let ctx = CommandContext::new(&self.logger).with_page(&page);

        match self.registry.execute_chain(&ctx, line) {
            Ok(()) => true,
            Err(err) => {
                self.report_error(&err);
                false
            }
        }
    }

    fn press_key(&self, key: &str) -> bool {
        let stack = self.session.context_stack();

        match keymap::dispatch_key(&self.registry, &stack, &self.bindings, &self.logger, key) {
            Ok(true) => true,
            Ok(false) => {
                print_colored_message(
                    &format!("Key '{}' is not bound in '{}'\n", key, stack.current()),
                    Color::DarkYellow,
                );
                true
            }
            Err(err) => {
                self.report_error(&err);
                false
            }
        }
    }

    fn report_error(&self, err: &CommandError) {
        self.logger.print_error("command execution", err);

        if let CommandError::NotFound(name) = err
            && let Some(best) = self.registry.suggest(name).first()
        {
            print_colored_message(&format!("Did you mean '{}'?\n", best), Color::DarkYellow);
        }
    }
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    match loaded {
        Ok(cfg) => cfg,
        Err(ConfigError::NotFound(path)) => {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            print_colored_message(
                &format!("Warning: {}\nUsing default configuration.\n", e),
                Color::DarkYellow,
            );
            Config::default()
        }
    }
}

fn print_colored_message(message: &str, color: Color) {
    let mut stdout = io::stdout();
    if execute!(stdout, SetForegroundColor(color), Print(message), ResetColor).is_err() {
        print!("{}", message);
    }
}
