//! Non-interactive subcommands.

pub mod allowed;
pub mod config;
pub mod filters;
pub mod scan;

use std::path::PathBuf;

use anyhow::{bail, Result};
use wififilter_core::{ActionOutcome, AllowedListStore, Config, ConfigStore, NetshRunner, NetshWorkflow};

/// Resolved settings shared by every subcommand.
pub struct Settings {
    pub config: Config,
    pub allowed_file: PathBuf,
}

impl Settings {
    /// Resolve file locations, letting `--allowed-file` win over the config.
    pub fn new(store: &ConfigStore, config: Config, allowed_override: Option<PathBuf>) -> Self {
        let allowed_file = allowed_override.unwrap_or_else(|| store.allowed_file(&config));
        Self {
            config,
            allowed_file,
        }
    }

    /// Build a workflow over the real netsh runner and the allowed-list file.
    pub fn workflow(&self) -> NetshWorkflow {
        let runner = NetshRunner::with_program(&self.config.netsh_path)
            .timeout(self.config.command_timeout());
        NetshWorkflow::new(runner, AllowedListStore::new(&self.allowed_file))
    }
}

/// Turn anything but a completed action into an error for the exit code.
pub fn check(outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Done => Ok(()),
        ActionOutcome::Failed(message) => bail!(message),
        ActionOutcome::NotApplicable(reason) => bail!("Nothing to do: {}", reason),
        ActionOutcome::Busy => bail!("Another operation is still running"),
    }
}

/// Load the saved allowed list, failing loudly if the file is unreadable.
pub async fn load(workflow: &NetshWorkflow) -> Result<()> {
    check(workflow.load_allowed().await)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
