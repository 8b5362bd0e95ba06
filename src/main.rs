// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use lingopad::app_config::{Config, LogLevel};
use lingopad::backend::http::HttpBackend;
use lingopad::session::controller::SessionOptions;
use lingopad::session::{CopyTarget, SessionController};
use lingopad::surface::terminal::{CommandClipboard, CommandSpeech, TerminalNotices};

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a single text and print the result
    Translate {
        /// Text to translate
        text: String,
    },

    /// Generate shell completions for lingopad
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// lingopad - translation session front end
///
/// Connects to a translation backend and drives an interactive translation
/// session: type text to translate it, or use commands for the other
/// affordances (swap, clear, copy, speak, detect, auto-translate).
#[derive(Parser, Debug)]
#[command(name = "lingopad")]
#[command(version)]
#[command(about = "Translation session front end")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the translation backend
    #[arg(short = 'u', long)]
    backend_url: Option<String>,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Start with auto-translate enabled
    #[arg(short, long)]
    auto_translate: bool,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => writeln!(stderr, "\x1B[1;31m{} {}\x1B[0m", now, record.args()),
                Level::Warn => writeln!(stderr, "\x1B[1;33m{} {}\x1B[0m", now, record.args()),
                Level::Info => writeln!(stderr, "{} {}", now, record.args()),
                _ => writeln!(stderr, "\x1B[2m{} {}\x1B[0m", now, record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "lingopad", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = build_controller(&config);
    controller.initialize().await;

    match cli.command {
        Some(Commands::Translate { text }) => {
            controller.on_source_text_changed(text);
            controller.translate().await;
            let state = controller.state();
            if !state.translated_text.is_empty() {
                println!("{}", state.translated_text);
            }
            Ok(())
        }
        Some(Commands::Completions { .. }) => unreachable!("handled above"),
        None => run_session(controller).await,
    }
}

/// Load the configuration file and fold the CLI overrides into it
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let path = cli
        .config_path
        .as_ref()
        .map(Into::into)
        .unwrap_or_else(Config::default_path);

    let mut config = if path.exists() {
        Config::from_file(&path)?
    } else {
        debug!("No config file at {:?}, using defaults", path);
        Config::default()
    };

    if let Some(url) = &cli.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(lang) = &cli.source_language {
        config.source_language = lang.clone();
    }
    if let Some(lang) = &cli.target_language {
        config.target_language = lang.clone();
    }
    if cli.auto_translate {
        config.auto_translate = true;
    }
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level.into();
    }

    config.validate()?;
    Ok(config)
}

/// Wire the controller to the live backend and the terminal surfaces
fn build_controller(config: &Config) -> SessionController {
    let options = SessionOptions {
        default_source_lang: config.source_language.clone(),
        default_target_lang: config.target_language.clone(),
        debounce_delay: Duration::from_millis(config.debounce_ms),
        auto_translate: config.auto_translate,
    };
    SessionController::with_options(
        Arc::new(HttpBackend::new(config.backend_url.clone())),
        Arc::new(TerminalNotices),
        Arc::new(CommandClipboard),
        Arc::new(CommandSpeech),
        options,
    )
}

/// Interactive session: each input line is a user intent.
///
/// Plain text edits the source field and translates it, the terminal
/// stand-in for typing plus Ctrl+Enter. Colon commands map to the other
/// controller operations.
async fn run_session(controller: SessionController) -> Result<()> {
    info!("Type text to translate, :help for commands, :quit to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        match line.as_str() {
            ":quit" | ":q" => break,
            ":help" => print_help(),
            ":swap" => controller.swap_languages(),
            ":clear" => controller.clear(),
            ":copy" => controller.copy(CopyTarget::Translated),
            ":copy source" => controller.copy(CopyTarget::Source),
            ":speak" => controller.speak(),
            ":detect" => controller.detect_language().await,
            ":auto" => controller.toggle_auto_translate(),
            ":langs" => {
                for (code, name) in controller.catalog().iter() {
                    println!("{:6} {}", code, name);
                }
            }
            ":info" => {
                let state = controller.state();
                if let Some((source, target)) = controller.translation_info() {
                    println!("{} -> {}", source, target);
                }
                println!("{} chars, auto-translate {}", state.char_count, on_off(state.auto_translate_enabled));
            }
            _ if line.starts_with(":source ") => {
                controller.set_source_language(line.trim_start_matches(":source ").trim());
            }
            _ if line.starts_with(":target ") => {
                controller.set_target_language(line.trim_start_matches(":target ").trim());
            }
            text => {
                controller.on_source_text_changed(text);
                controller.translate().await;
                let state = controller.state();
                if !state.translated_text.is_empty() {
                    println!("{}", state.translated_text);
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "Commands:\n\
         :swap            swap languages and texts\n\
         :clear           clear both texts\n\
         :copy [source]   copy translation (or source) to the clipboard\n\
         :speak           speak the translation\n\
         :detect          detect the source language\n\
         :auto            toggle auto-translate\n\
         :source <code>   select the source language\n\
         :target <code>   select the target language\n\
         :langs           list supported languages\n\
         :info            show session info\n\
         :quit            exit"
    );
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
