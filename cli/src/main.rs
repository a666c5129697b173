//! WiFiFilter CLI - Curate an allow-list of wireless networks
//!
//! A command-line tool for scanning nearby networks, keeping a list of
//! allowed SSIDs, and hiding every other network with OS filters.

mod commands;
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wififilter_core::{install_panic_hook, ConfigStore, FaultLog, FaultNotices};

use commands::Settings;

#[derive(Parser)]
#[command(name = "wififilter")]
#[command(author, version, about = "Show only the WiFi networks you allow")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Disable interactive TUI mode
    #[arg(long, global = true)]
    no_tui: bool,

    /// Use this allowed-list file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    allowed_file: Option<PathBuf>,

    /// Log workflow steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List nearby networks that are not allowed yet
    #[command(alias = "ls")]
    Scan {
        /// Only show networks whose name or security matches
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List allowed networks
    Allowed,

    /// Add a network to the allowed list
    Allow { ssid: String },

    /// Remove a network from the allowed list
    #[command(alias = "rm")]
    Remove { ssid: String },

    /// Hide every network except the allowed ones
    Apply,

    /// Remove all filters and forget the allowed list
    Clear,

    /// Show the filters currently configured in the OS
    Filters,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the executable used for wlan commands
    NetshPath { path: String },
    /// Set the per-command timeout in seconds (0 waits indefinitely)
    Timeout { secs: u64 },
    /// Set the allowed-list file, or reset it to the default when omitted
    AllowedFile { path: Option<PathBuf> },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_store = ConfigStore::new()?;
    let config = config_store.load().await?;

    let fault_log = FaultLog::new(config_store.log_file(&config));
    fault_log.record_startup();
    let notices = FaultNotices::new();
    install_panic_hook(fault_log, notices.clone());

    let settings = Settings::new(&config_store, config, cli.allowed_file);

    match cli.command {
        Some(Commands::Scan { search }) => {
            commands::scan::run(&settings, search.as_deref(), cli.json).await?;
        }
        Some(Commands::Allowed) => commands::allowed::list(&settings, cli.json).await?,
        Some(Commands::Allow { ssid }) => commands::allowed::add(&settings, &ssid).await?,
        Some(Commands::Remove { ssid }) => commands::allowed::remove(&settings, &ssid).await?,
        Some(Commands::Apply) => commands::filters::apply(&settings).await?,
        Some(Commands::Clear) => commands::filters::clear(&settings).await?,
        Some(Commands::Filters) => commands::filters::show(&settings, cli.json).await?,
        Some(Commands::Config { action }) => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config::show(&config_store, &settings, cli.json)?,
            ConfigAction::NetshPath { path } => {
                commands::config::set_netsh_path(&config_store, &path).await?
            }
            ConfigAction::Timeout { secs } => {
                commands::config::set_timeout(&config_store, secs).await?
            }
            ConfigAction::AllowedFile { path } => {
                commands::config::set_allowed_file(&config_store, path).await?
            }
        },
        None => {
            // Default: Launch TUI or list networks
            if cli.no_tui || !atty::is(atty::Stream::Stdout) {
                commands::scan::run(&settings, None, cli.json).await?;
            } else {
                tui::run(&settings, notices).await?;
            }
        }
    }

    Ok(())
}
