use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use f1::commands;
use f1::config::{self, Config};
use f1::data_provider::{Client, F1DataProvider};
use f1::panel::PanelKind;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "f1")]
#[command(about = "F1 news and standings", long_about = "F1 news and standings\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Base URL of the dashboard server (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Serve fixture data instead of calling the server
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PanelArg {
    News,
    Drivers,
    Constructors,
}

impl PanelArg {
    fn kind(&self) -> PanelKind {
        match self {
            PanelArg::News => PanelKind::News,
            PanelArg::Drivers => PanelKind::Drivers,
            PanelArg::Constructors => PanelKind::Constructors,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display the latest F1 news
    News,
    /// Display driver championship standings
    Drivers,
    /// Display constructor championship standings
    Constructors,
    /// Print the dashboard markup for one panel
    Html {
        #[arg(value_enum)]
        panel: PanelArg,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("base_url: {}", cfg.base_url);
    println!("news_refresh_interval: {} seconds", cfg.news_refresh_interval);
    println!("date_format: {}", cfg.date_format);
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[cfg(feature = "development")]
fn create_client(cli: &Cli, config: &Config) -> Arc<dyn F1DataProvider> {
    if cli.mock {
        tracing::info!("Using fixture data");
        return Arc::new(f1::fixtures::MockClient::new());
    }
    Arc::new(Client::new(&config.base_url))
}

#[cfg(not(feature = "development"))]
fn create_client(_cli: &Cli, config: &Config) -> Arc<dyn F1DataProvider> {
    Arc::new(Client::new(&config.base_url))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(client: &dyn F1DataProvider, command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::News => commands::panels::run(client, PanelKind::News, config).await,
        Commands::Drivers => commands::panels::run(client, PanelKind::Drivers, config).await,
        Commands::Constructors => commands::panels::run(client, PanelKind::Constructors, config).await,
        Commands::Html { panel } => commands::html::run(client, panel.kind(), config).await,
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    let client = create_client(&cli, &config);

    let Some(command) = cli.command else {
        if let Err(e) = f1::tui::run(client, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    if let Err(e) = execute_command(client.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
