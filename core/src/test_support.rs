//! Test doubles for the port traits.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{AllowedEntry, WlanCommand};
use crate::error::{Error, Result};
use crate::ports::{AllowedListRepository, CommandRunnerPort};

/// Runner that records every invocation and answers from a canned table.
///
/// Unknown commands answer with a generic success line.
#[derive(Clone, Default)]
pub struct MockRunner {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `output` from now on.
    pub fn respond(&self, command: WlanCommand, output: &str) -> &Self {
        self.responses
            .lock()
            .insert(command.to_string(), output.to_string());
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl CommandRunnerPort for MockRunner {
    async fn run(&self, args: &[String]) -> String {
        let line = args.join(" ");
        self.calls.lock().push(line.clone());
        self.responses
            .lock()
            .get(&line)
            .cloned()
            .unwrap_or_else(|| "Ok.".to_string())
    }
}

/// In-memory allowed-list store that can be told to fail.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<Vec<AllowedEntry>>>,
    saves: Arc<Mutex<usize>>,
    fail: Arc<Mutex<bool>>,
}

impl MemoryStore {
    pub fn with_entries(ssids: &[&str]) -> Self {
        let store = Self::default();
        *store.entries.lock() = ssids.iter().map(|s| AllowedEntry::new(*s)).collect();
        store
    }

    pub fn ssids(&self) -> Vec<String> {
        self.entries.lock().iter().map(|e| e.ssid.clone()).collect()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock() = fail;
    }
}

impl AllowedListRepository for MemoryStore {
    async fn load(&self) -> Result<Vec<AllowedEntry>> {
        if *self.fail.lock() {
            return Err(Error::Persistence("disk unavailable".to_string()));
        }
        Ok(self.entries.lock().clone())
    }

    async fn save(&self, entries: &[AllowedEntry]) -> Result<()> {
        if *self.fail.lock() {
            return Err(Error::Persistence("disk unavailable".to_string()));
        }
        *self.entries.lock() = entries.to_vec();
        *self.saves.lock() += 1;
        Ok(())
    }
}
