//! Workflow orchestration.
//!
//! [`Workflow`] is the single owner of the available/allowed collections and
//! the status line. Front ends call its actions and drain its events; they
//! never touch the collections directly.

use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::domain::{
    ActionOutcome, AllowedEntry, NetworkLists, NetworkRecord, WorkflowEvent, WorkflowStatus,
};
use crate::ports::{AllowedListRepository, CommandRunnerPort};

use super::FilterController;

/// Mutable state guarded by a single lock.
#[derive(Default)]
struct WorkflowState {
    lists: NetworkLists,
    selected_available: Option<String>,
    selected_allowed: Option<String>,
    status: WorkflowStatus,
}

/// Orchestrates scanning, allow-list curation and filter application.
///
/// Only one action runs at a time. An action invoked while another is in
/// progress returns [`ActionOutcome::Busy`] and changes nothing. Locks on
/// the shared state are never held across an `.await`.
///
/// # Usage Pattern
/// Call [`initialize`](Self::initialize) once at startup, then invoke
/// actions in response to user input. After each action, drain
/// [`take_events`](Self::take_events) to learn what changed.
pub struct Workflow<R: CommandRunnerPort, S: AllowedListRepository> {
    filters: FilterController<R>,
    store: S,
    state: RwLock<WorkflowState>,
    gate: tokio::sync::Mutex<()>,
    pending_events: Mutex<Vec<WorkflowEvent>>,
}

impl<R: CommandRunnerPort, S: AllowedListRepository> Workflow<R, S> {
    /// Create a workflow over the given runner and store.
    ///
    /// Nothing is loaded or scanned until [`initialize`](Self::initialize) is called.
    pub fn new(runner: R, store: S) -> Self {
        Self {
            filters: FilterController::new(runner),
            store,
            state: RwLock::new(WorkflowState::default()),
            gate: tokio::sync::Mutex::new(()),
            pending_events: Mutex::new(Vec::new()),
        }
    }

    /// The filter controller, for read-only operations such as listing filters.
    pub fn filters(&self) -> &FilterController<R> {
        &self.filters
    }

    // MARK: - State Access

    /// Networks from the last scan that are not allowed.
    pub fn available(&self) -> Vec<NetworkRecord> {
        self.state.read().lists.available().to_vec()
    }

    /// Allowed entries in order.
    pub fn allowed(&self) -> Vec<AllowedEntry> {
        self.state.read().lists.allowed().to_vec()
    }

    /// Current status line.
    pub fn status(&self) -> WorkflowStatus {
        self.state.read().status.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.read().status.busy
    }

    // MARK: - Selection

    /// Select an available network by SSID, or clear the selection with `None`.
    ///
    /// Returns `false` (and clears the selection) if the SSID is not available.
    pub fn select_available(&self, ssid: Option<&str>) -> bool {
        let mut state = self.state.write();
        let found = ssid.filter(|s| state.lists.is_available(s)).map(str::to_string);
        let matched = ssid.is_none() || found.is_some();
        state.selected_available = found;
        matched
    }

    /// Select an allowed entry by SSID, or clear the selection with `None`.
    ///
    /// Returns `false` (and clears the selection) if the SSID is not allowed.
    pub fn select_allowed(&self, ssid: Option<&str>) -> bool {
        let mut state = self.state.write();
        let found = ssid.filter(|s| state.lists.is_allowed(s)).map(str::to_string);
        let matched = ssid.is_none() || found.is_some();
        state.selected_allowed = found;
        matched
    }

    /// Currently selected available network.
    pub fn selected_available(&self) -> Option<NetworkRecord> {
        let state = self.state.read();
        let ssid = state.selected_available.as_deref()?;
        state.lists.available().iter().find(|r| r.ssid == ssid).cloned()
    }

    /// Currently selected allowed entry.
    pub fn selected_allowed(&self) -> Option<AllowedEntry> {
        let state = self.state.read();
        let ssid = state.selected_allowed.as_deref()?;
        state.lists.allowed().iter().find(|e| e.ssid == ssid).cloned()
    }

    /// Allow is possible: an available network is selected and nothing is running.
    pub fn can_allow(&self) -> bool {
        !self.is_busy() && self.selected_available().is_some()
    }

    /// Remove is possible: an allowed entry is selected and nothing is running.
    pub fn can_remove(&self) -> bool {
        !self.is_busy() && self.selected_allowed().is_some()
    }

    /// Apply is possible: at least one network is allowed and nothing is running.
    pub fn can_apply(&self) -> bool {
        let state = self.state.read();
        !state.status.busy && !state.lists.allowed().is_empty()
    }

    // MARK: - Events

    /// Get and clear pending events.
    pub fn take_events(&self) -> Vec<WorkflowEvent> {
        std::mem::take(&mut *self.pending_events.lock())
    }

    /// Check if there are pending events.
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.lock().is_empty()
    }

    fn emit(&self, event: WorkflowEvent) {
        self.pending_events.lock().push(event);
    }

    fn set_status(&self, status: WorkflowStatus) {
        self.state.write().status = status.clone();
        self.emit(WorkflowEvent::StatusChanged(status));
    }

    // MARK: - Actions

    /// Load the saved allow-list, then run the first scan.
    ///
    /// A load failure is reported and the scan still runs.
    pub async fn initialize(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };

        let loaded = self.load_inner().await;
        let scanned = self.run_scan().await;
        self.keep_failure(loaded, scanned)
    }

    /// Load the saved allow-list without scanning.
    pub async fn load_allowed(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };
        self.load_inner().await
    }

    /// Replace the available list with a fresh scan.
    pub async fn scan(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };
        self.run_scan().await
    }

    /// Move the selected available network to the allowed list.
    pub async fn allow(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };
        let Some(record) = self.selected_available() else {
            return ActionOutcome::NotApplicable("no available network selected");
        };
        self.allow_inner(&record.ssid).await
    }

    /// Allow a network by name, whether or not the last scan saw it.
    ///
    /// Surrounding whitespace is dropped, since the saved list is trimmed on load.
    pub async fn allow_ssid(&self, ssid: &str) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };
        let ssid = ssid.trim();
        if ssid.is_empty() {
            return ActionOutcome::NotApplicable("network name is empty");
        }
        if ssid.contains(['\r', '\n']) {
            return ActionOutcome::NotApplicable("network name contains a line break");
        }
        self.allow_inner(ssid).await
    }

    /// Move the selected allowed entry back to the available list.
    pub async fn remove(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };
        let Some(entry) = self.selected_allowed() else {
            return ActionOutcome::NotApplicable("no allowed network selected");
        };
        self.remove_inner(&entry.ssid).await
    }

    /// Remove an allowed network by name.
    pub async fn remove_ssid(&self, ssid: &str) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };
        self.remove_inner(ssid.trim()).await
    }

    /// Block every network, then allow each allowed SSID in order.
    ///
    /// If the denyall filter cannot be added no allow filters are issued.
    pub async fn apply(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };

        let ssids = self.state.read().lists.allowed_ssids();
        if ssids.is_empty() {
            return ActionOutcome::NotApplicable("no allowed networks to apply");
        }

        self.set_status(WorkflowStatus::busy("Applying filters..."));

        if !self.filters.block_all().await {
            return self.fail("Failed to hide networks.".to_string());
        }

        let mut failed = 0;
        for ssid in &ssids {
            if !self.filters.add_allow_filter(ssid).await {
                failed += 1;
            }
        }

        info!(allowed = ssids.len(), failed, "filters applied");
        if failed > 0 {
            return self.fail(format!(
                "Filters applied, but {} of {} allow filters failed.",
                failed,
                ssids.len()
            ));
        }
        self.set_status(WorkflowStatus::idle("Filters applied successfully."));
        ActionOutcome::Done
    }

    /// Remove every OS filter, forget the allowed list and rescan.
    ///
    /// The emptied allowed list is saved, so the next start does not bring
    /// the cleared entries back.
    pub async fn clear(&self) -> ActionOutcome {
        let Ok(_guard) = self.gate.try_lock() else {
            return ActionOutcome::Busy;
        };

        self.set_status(WorkflowStatus::busy("Clearing filters..."));
        self.filters.clear_all().await;

        {
            let mut state = self.state.write();
            state.lists.clear_allowed();
            state.selected_allowed = None;
        }
        self.emit(WorkflowEvent::AllowedChanged);
        let saved = self.persist().await;

        self.set_status(WorkflowStatus::busy(
            "All filters cleared. Showing all networks.",
        ));
        let scanned = self.run_scan().await;
        self.keep_failure(saved, scanned)
    }

    // MARK: - Internals

    async fn load_inner(&self) -> ActionOutcome {
        match self.store.load().await {
            Ok(entries) => {
                let count = {
                    let mut state = self.state.write();
                    state.lists.set_allowed(entries);
                    state.selected_allowed = None;
                    state.lists.allowed().len()
                };
                info!(count, "loaded allowed networks");
                self.emit(WorkflowEvent::AllowedChanged);
                ActionOutcome::Done
            }
            Err(e) => {
                warn!(error = %e, "failed to load allowed networks");
                self.fail(format!("Error loading allowed SSIDs: {}", e))
            }
        }
    }

    async fn run_scan(&self) -> ActionOutcome {
        self.set_status(WorkflowStatus::busy("Scanning networks..."));
        {
            let mut state = self.state.write();
            state.lists.clear_available();
            state.selected_available = None;
        }
        self.emit(WorkflowEvent::AvailableChanged);

        match self.filters.scan_networks().await {
            Ok(records) => {
                let count = {
                    let mut state = self.state.write();
                    state.lists.replace_available(records);
                    state.lists.available().len()
                };
                info!(count, "scan complete");
                self.emit(WorkflowEvent::AvailableChanged);
                self.set_status(WorkflowStatus::idle(format!("Found {} networks.", count)));
                ActionOutcome::Done
            }
            Err(e) => {
                warn!(error = %e, "scan failed");
                self.fail(format!("Scan failed: {}", e))
            }
        }
    }

    async fn allow_inner(&self, ssid: &str) -> ActionOutcome {
        let added = {
            let mut state = self.state.write();
            let added = state.lists.allow(ssid);
            if added && state.selected_available.as_deref() == Some(ssid) {
                state.selected_available = None;
            }
            added
        };
        if !added {
            return ActionOutcome::NotApplicable("network is already allowed");
        }

        info!(ssid, "network allowed");
        self.emit(WorkflowEvent::AvailableChanged);
        self.emit(WorkflowEvent::AllowedChanged);
        self.set_status(WorkflowStatus::idle(format!("Allowed {}.", ssid)));
        self.persist().await
    }

    async fn remove_inner(&self, ssid: &str) -> ActionOutcome {
        let removed = {
            let mut state = self.state.write();
            let removed = state.lists.remove(ssid);
            if removed && state.selected_allowed.as_deref() == Some(ssid) {
                state.selected_allowed = None;
            }
            removed
        };
        if !removed {
            return ActionOutcome::NotApplicable("network is not allowed");
        }

        info!(ssid, "network removed from allowed list");
        self.emit(WorkflowEvent::AllowedChanged);
        self.emit(WorkflowEvent::AvailableChanged);
        self.set_status(WorkflowStatus::idle(format!("Removed {}.", ssid)));
        self.persist().await
    }

    /// Save the allowed list. The in-memory list is kept even when saving fails.
    async fn persist(&self) -> ActionOutcome {
        let entries = self.allowed();
        match self.store.save(&entries).await {
            Ok(()) => ActionOutcome::Done,
            Err(e) => {
                warn!(error = %e, "failed to save allowed networks");
                self.fail(format!("Error saving allowed SSIDs: {}", e))
            }
        }
    }

    /// Combine an earlier step with the scan that followed it.
    ///
    /// A failed earlier step stays visible: its message is appended to the
    /// status the scan left behind.
    fn keep_failure(&self, earlier: ActionOutcome, scanned: ActionOutcome) -> ActionOutcome {
        match earlier {
            ActionOutcome::Failed(message) => {
                let current = self.status().message;
                self.fail(format!("{} {}", current, message))
            }
            _ => scanned,
        }
    }

    /// Report a failed step: idle status carrying the message.
    fn fail(&self, message: String) -> ActionOutcome {
        self.set_status(WorkflowStatus::idle(message.clone()));
        ActionOutcome::Failed(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::AllowedListStore;
    use crate::domain::{NetworkType, WlanCommand};
    use crate::test_support::{MemoryStore, MockRunner};

    const REPORT: &str = "\
SSID 1 : HomeNet
    Authentication          : WPA2-Personal
         Signal             : 80%
SSID 2 : CafeWiFi
SSID 3 : Office
    Authentication          : WPA3-Personal
         Signal             : 55%
";

    fn workflow(saved: &[&str]) -> (Workflow<MockRunner, MemoryStore>, MockRunner, MemoryStore) {
        let runner = MockRunner::new();
        runner.respond(WlanCommand::ShowNetworks, REPORT);
        let store = MemoryStore::with_entries(saved);
        (Workflow::new(runner.clone(), store.clone()), runner, store)
    }

    fn available_ssids<R: CommandRunnerPort, S: AllowedListRepository>(
        wf: &Workflow<R, S>,
    ) -> Vec<String> {
        wf.available().into_iter().map(|r| r.ssid).collect()
    }

    fn allowed_ssids<R: CommandRunnerPort, S: AllowedListRepository>(
        wf: &Workflow<R, S>,
    ) -> Vec<String> {
        wf.allowed().into_iter().map(|e| e.ssid).collect()
    }

    fn assert_disjoint<R: CommandRunnerPort, S: AllowedListRepository>(wf: &Workflow<R, S>) {
        let allowed = allowed_ssids(wf);
        assert!(available_ssids(wf).iter().all(|s| !allowed.contains(s)));
    }

    #[tokio::test]
    async fn test_initialize_loads_then_scans() {
        let (wf, runner, _store) = workflow(&["CafeWiFi"]);
        assert_eq!(wf.initialize().await, ActionOutcome::Done);

        assert_eq!(allowed_ssids(&wf), vec!["CafeWiFi"]);
        assert_eq!(available_ssids(&wf), vec!["HomeNet", "Office"]);
        assert_eq!(runner.calls(), vec!["wlan show networks mode=bssid"]);
        assert_eq!(wf.status(), WorkflowStatus::idle("Found 2 networks."));
        assert_disjoint(&wf);
    }

    #[tokio::test]
    async fn test_initialize_load_failure_still_scans() {
        let (wf, _runner, store) = workflow(&["CafeWiFi"]);
        store.set_failing(true);
        assert!(wf.initialize().await.is_failed());

        assert!(wf.allowed().is_empty());
        assert_eq!(available_ssids(&wf).len(), 3);
        assert_eq!(
            wf.status(),
            WorkflowStatus::idle(
                "Found 3 networks. Error loading allowed SSIDs: Persistence error: disk unavailable"
            )
        );
        let events = wf.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            WorkflowEvent::StatusChanged(s) if s.message.starts_with("Error loading allowed SSIDs")
        )));
    }

    #[tokio::test]
    async fn test_scan_failure_reports_status() {
        let (wf, runner, _store) = workflow(&[]);
        runner.respond(WlanCommand::ShowNetworks, "Error: Failed to run netsh");
        assert!(wf.scan().await.is_failed());

        assert!(wf.available().is_empty());
        let status = wf.status();
        assert!(!status.busy);
        assert!(status.message.starts_with("Scan failed"));
    }

    #[tokio::test]
    async fn test_scan_replaces_available() {
        let (wf, runner, _store) = workflow(&[]);
        wf.scan().await;
        assert_eq!(available_ssids(&wf).len(), 3);

        runner.respond(WlanCommand::ShowNetworks, "SSID 1 : Office\n");
        wf.scan().await;
        assert_eq!(available_ssids(&wf), vec!["Office"]);
    }

    #[tokio::test]
    async fn test_allow_requires_selection() {
        let (wf, _runner, store) = workflow(&[]);
        wf.initialize().await;

        assert!(!wf.can_allow());
        assert!(matches!(wf.allow().await, ActionOutcome::NotApplicable(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_allow_moves_selected_and_persists() {
        let (wf, _runner, store) = workflow(&[]);
        wf.initialize().await;

        assert!(wf.select_available(Some("HomeNet")));
        assert!(wf.can_allow());
        assert_eq!(wf.allow().await, ActionOutcome::Done);

        assert_eq!(allowed_ssids(&wf), vec!["HomeNet"]);
        assert_eq!(available_ssids(&wf), vec!["CafeWiFi", "Office"]);
        assert_eq!(store.ssids(), vec!["HomeNet"]);
        assert!(wf.selected_available().is_none());
        assert_disjoint(&wf);
    }

    #[tokio::test]
    async fn test_select_unknown_ssid() {
        let (wf, _runner, _store) = workflow(&[]);
        wf.initialize().await;

        assert!(!wf.select_available(Some("Nowhere")));
        assert!(wf.selected_available().is_none());
        assert!(!wf.select_allowed(Some("HomeNet")));
        assert!(wf.select_available(None));
    }

    #[tokio::test]
    async fn test_remove_moves_back_with_placeholder() {
        let (wf, _runner, store) = workflow(&["HomeNet", "Office"]);
        wf.initialize().await;

        assert!(matches!(wf.remove().await, ActionOutcome::NotApplicable(_)));

        wf.select_allowed(Some("HomeNet"));
        assert!(wf.can_remove());
        assert_eq!(wf.remove().await, ActionOutcome::Done);

        assert_eq!(allowed_ssids(&wf), vec!["Office"]);
        assert_eq!(store.ssids(), vec!["Office"]);
        let restored = wf.available().into_iter().find(|r| r.ssid == "HomeNet").unwrap();
        assert_eq!(restored, NetworkRecord::saved("HomeNet"));
        assert_disjoint(&wf);
    }

    #[tokio::test]
    async fn test_allow_and_remove_by_ssid() {
        let (wf, _runner, store) = workflow(&[]);
        wf.initialize().await;

        assert_eq!(wf.allow_ssid("Hidden").await, ActionOutcome::Done);
        assert_eq!(wf.allow_ssid("CafeWiFi").await, ActionOutcome::Done);
        assert!(matches!(wf.allow_ssid("CafeWiFi").await, ActionOutcome::NotApplicable(_)));
        assert!(matches!(wf.allow_ssid("  ").await, ActionOutcome::NotApplicable(_)));
        assert_eq!(store.ssids(), vec!["Hidden", "CafeWiFi"]);
        assert_disjoint(&wf);

        assert_eq!(wf.remove_ssid("CafeWiFi").await, ActionOutcome::Done);
        assert!(matches!(wf.remove_ssid("Office").await, ActionOutcome::NotApplicable(_)));
        assert_eq!(store.ssids(), vec!["Hidden"]);
        assert_disjoint(&wf);
    }

    #[tokio::test]
    async fn test_save_failure_is_reported_not_fatal() {
        let (wf, _runner, store) = workflow(&[]);
        wf.initialize().await;
        store.set_failing(true);

        assert!(wf.allow_ssid("HomeNet").await.is_failed());
        assert_eq!(allowed_ssids(&wf), vec!["HomeNet"]);
        assert!(wf.status().message.starts_with("Error saving allowed SSIDs"));
    }

    #[tokio::test]
    async fn test_apply_issues_allow_filters_in_order() {
        let (wf, runner, _store) = workflow(&["Office", "HomeNet"]);
        wf.initialize().await;
        runner.clear_calls();

        assert!(wf.can_apply());
        assert_eq!(wf.apply().await, ActionOutcome::Done);
        assert_eq!(
            runner.calls(),
            vec![
                "wlan add filter permission=denyall networktype=infrastructure",
                "wlan add filter permission=allow ssid=\"Office\" networktype=infrastructure",
                "wlan add filter permission=allow ssid=\"HomeNet\" networktype=infrastructure",
            ]
        );
        assert_eq!(wf.status(), WorkflowStatus::idle("Filters applied successfully."));
    }

    #[tokio::test]
    async fn test_apply_stops_when_block_all_fails() {
        let (wf, runner, _store) = workflow(&["Office", "HomeNet"]);
        wf.initialize().await;
        runner.clear_calls();
        runner.respond(
            WlanCommand::AddDenyAll(NetworkType::Infrastructure),
            "Error: The requested operation requires elevation.",
        );

        assert_eq!(
            wf.apply().await,
            ActionOutcome::Failed("Failed to hide networks.".to_string())
        );
        assert_eq!(
            runner.calls(),
            vec!["wlan add filter permission=denyall networktype=infrastructure"]
        );
        assert_eq!(wf.status(), WorkflowStatus::idle("Failed to hide networks."));
    }

    #[tokio::test]
    async fn test_apply_reports_failed_allow_filters() {
        let (wf, runner, _store) = workflow(&["Office", "HomeNet"]);
        wf.initialize().await;
        runner.respond(WlanCommand::AddAllow("Office".into()), "Error: bad SSID");

        assert!(wf.apply().await.is_failed());
        // The remaining allow filter is still issued
        assert!(runner
            .calls()
            .iter()
            .any(|c| c.contains("permission=allow ssid=\"HomeNet\"")));
        assert_eq!(
            wf.status().message,
            "Filters applied, but 1 of 2 allow filters failed."
        );
    }

    #[tokio::test]
    async fn test_load_allowed_does_not_scan() {
        let (wf, runner, _store) = workflow(&["HomeNet"]);
        assert_eq!(wf.load_allowed().await, ActionOutcome::Done);
        assert_eq!(allowed_ssids(&wf), vec!["HomeNet"]);
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_apply_without_allowed_networks() {
        let (wf, runner, _store) = workflow(&[]);
        wf.initialize().await;
        runner.clear_calls();

        assert!(!wf.can_apply());
        assert!(matches!(wf.apply().await, ActionOutcome::NotApplicable(_)));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_filters_persists_and_rescans() {
        let (wf, runner, store) = workflow(&["HomeNet", "Office"]);
        wf.initialize().await;
        runner.clear_calls();

        assert_eq!(wf.clear().await, ActionOutcome::Done);

        assert!(wf.allowed().is_empty());
        assert!(store.ssids().is_empty());
        assert_eq!(available_ssids(&wf), vec!["HomeNet", "CafeWiFi", "Office"]);

        let calls = runner.calls();
        assert_eq!(calls.first().unwrap(), "wlan delete filter permission=denyall networktype=infrastructure");
        assert_eq!(calls.last().unwrap(), "wlan show networks mode=bssid");
        assert!(!wf.is_busy());
    }

    #[tokio::test]
    async fn test_busy_gate_rejects_overlapping_actions() {
        let (wf, runner, store) = workflow(&[]);
        wf.initialize().await;
        runner.clear_calls();

        let _held = wf.gate.lock().await;
        assert_eq!(wf.scan().await, ActionOutcome::Busy);
        assert_eq!(wf.allow_ssid("HomeNet").await, ActionOutcome::Busy);
        assert_eq!(wf.clear().await, ActionOutcome::Busy);
        assert!(runner.calls().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_clear_keeps_save_failure_visible() {
        let (wf, _runner, store) = workflow(&["HomeNet"]);
        wf.initialize().await;
        store.set_failing(true);

        assert!(wf.clear().await.is_failed());
        let message = wf.status().message;
        assert!(message.starts_with("Found 3 networks."));
        assert!(message.contains("Error saving allowed SSIDs"));
    }

    #[tokio::test]
    async fn test_scan_keeps_networks_named_error() {
        let (wf, runner, _store) = workflow(&[]);
        runner.respond(
            WlanCommand::ShowNetworks,
            "SSID 1 : HomeNet\n    Signal : 80%\nSSID 2 : ErrorProne\n",
        );

        assert_eq!(wf.scan().await, ActionOutcome::Done);
        assert_eq!(available_ssids(&wf), vec!["HomeNet", "ErrorProne"]);
        assert_eq!(wf.status(), WorkflowStatus::idle("Found 2 networks."));
    }

    #[tokio::test]
    async fn test_allowed_ssid_survives_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("allowed_ssids.txt");
        let runner = MockRunner::new();
        let wf = Workflow::new(runner.clone(), AllowedListStore::new(&path));

        assert_eq!(wf.allow_ssid(" HomeNet ").await, ActionOutcome::Done);
        assert_eq!(
            wf.allow_ssid("Cafe\nWiFi").await,
            ActionOutcome::NotApplicable("network name contains a line break")
        );
        assert_eq!(allowed_ssids(&wf), vec!["HomeNet"]);

        let reloaded = Workflow::new(runner, AllowedListStore::new(&path));
        assert_eq!(reloaded.load_allowed().await, ActionOutcome::Done);
        assert_eq!(allowed_ssids(&reloaded), vec!["HomeNet"]);
        assert_eq!(reloaded.remove_ssid("HomeNet ").await, ActionOutcome::Done);
    }

    #[tokio::test]
    async fn test_events_are_drained() {
        let (wf, _runner, _store) = workflow(&[]);
        wf.initialize().await;

        assert!(wf.has_pending_events());
        let events = wf.take_events();
        assert!(events.contains(&WorkflowEvent::AvailableChanged));
        assert!(events.contains(&WorkflowEvent::StatusChanged(WorkflowStatus::busy(
            "Scanning networks..."
        ))));
        assert!(!wf.has_pending_events());
    }
}
