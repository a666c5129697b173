//! netsh wlan filter operations.

use tracing::{debug, info, warn};

use crate::domain::{
    is_error_output, runner_failure, FilterReport, NetworkRecord, NetworkType, WlanCommand,
};
use crate::error::{Error, Result};
use crate::parser::{parse_filter_ssids, parse_filters, parse_networks};
use crate::ports::CommandRunnerPort;

/// Application service for the OS-level network filters.
///
/// Each operation is a fixed sequence of `netsh wlan` calls. Sub-steps are
/// best effort: a failing step is logged and the sequence carries on, with
/// no compensation for steps that already ran.
pub struct FilterController<R: CommandRunnerPort> {
    runner: R,
}

impl<R: CommandRunnerPort> FilterController<R> {
    /// Create a new controller with the given command runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// The underlying command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn run(&self, command: WlanCommand) -> String {
        self.runner.run(&command.args()).await
    }

    /// Run a command and report whether its output is free of the error marker.
    async fn run_checked(&self, command: WlanCommand) -> bool {
        let output = self.run(command.clone()).await;
        let ok = !is_error_output(&output);
        if !ok {
            warn!(%command, output = %output.trim(), "netsh reported an error");
        }
        ok
    }

    /// Scan for nearby networks.
    ///
    /// Fails with [`Error::CommandFailed`] only when the runner itself failed.
    /// Any other output is parsed, whatever network names it contains.
    pub async fn scan_networks(&self) -> Result<Vec<NetworkRecord>> {
        let output = self.run(WlanCommand::ShowNetworks).await;
        if let Some(cause) = runner_failure(&output) {
            return Err(Error::CommandFailed(cause.to_string()));
        }
        let records = parse_networks(&output);
        debug!(count = records.len(), "parsed network report");
        Ok(records)
    }

    /// Allow an SSID through the denyall filter.
    pub async fn add_allow_filter(&self, ssid: &str) -> bool {
        self.run_checked(WlanCommand::AddAllow(ssid.to_string()))
            .await
    }

    /// Delete any allow or block filter for an SSID.
    ///
    /// Both deletions are always issued; only the block deletion decides the result.
    pub async fn remove_filter(&self, ssid: &str) -> bool {
        self.run(WlanCommand::DeleteAllow(ssid.to_string())).await;
        self.run_checked(WlanCommand::DeleteBlock(ssid.to_string()))
            .await
    }

    /// Hide every infrastructure network that is not explicitly allowed.
    pub async fn block_all(&self) -> bool {
        let ok = self
            .run_checked(WlanCommand::AddDenyAll(NetworkType::Infrastructure))
            .await;
        if ok {
            info!("denyall filter added");
        }
        ok
    }

    /// Reset filter state to "allow everything".
    ///
    /// Deletes the denyall filters for both network types, then deletes the
    /// allow and block filters of every SSID the OS still lists.
    pub async fn clear_all(&self) -> bool {
        self.run(WlanCommand::DeleteDenyAll(NetworkType::Infrastructure))
            .await;
        self.run(WlanCommand::DeleteDenyAll(NetworkType::Adhoc)).await;

        let listing = self.run(WlanCommand::ShowFilters).await;
        let ssids = parse_filter_ssids(&listing);
        for ssid in &ssids {
            self.remove_filter(ssid).await;
        }

        info!(removed = ssids.len(), "filters cleared");
        true
    }

    /// List the filters currently configured in the OS.
    pub async fn list_filters(&self) -> Result<FilterReport> {
        let output = self.run(WlanCommand::ShowFilters).await;
        if let Some(cause) = runner_failure(&output) {
            return Err(Error::CommandFailed(cause.to_string()));
        }
        Ok(parse_filters(&output))
    }
}
