//! The available/allowed network collections.

use serde::{Deserialize, Serialize};

use super::{AllowedEntry, NetworkRecord};

/// The two ordered network collections shown to the user.
///
/// Invariant: no SSID is ever present in both `available` and `allowed`.
/// Every mutating method keeps that invariant, so a move between the two
/// collections is a single call with no observable intermediate state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLists {
    available: Vec<NetworkRecord>,
    allowed: Vec<AllowedEntry>,
}

impl NetworkLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Networks found by the last scan that are not allowed.
    pub fn available(&self) -> &[NetworkRecord] {
        &self.available
    }

    /// Allowed SSIDs in the order they were added.
    pub fn allowed(&self) -> &[AllowedEntry] {
        &self.allowed
    }

    /// Allowed SSIDs as plain strings.
    pub fn allowed_ssids(&self) -> Vec<String> {
        self.allowed.iter().map(|e| e.ssid.clone()).collect()
    }

    pub fn is_allowed(&self, ssid: &str) -> bool {
        self.allowed.iter().any(|e| e.ssid == ssid)
    }

    pub fn is_available(&self, ssid: &str) -> bool {
        self.available.iter().any(|r| r.ssid == ssid)
    }

    /// Replace the available networks with a fresh scan.
    ///
    /// Records whose SSID is allowed, or that repeat an earlier SSID, are dropped.
    pub fn replace_available(&mut self, records: Vec<NetworkRecord>) {
        self.available.clear();
        for record in records {
            if self.is_allowed(&record.ssid) || self.is_available(&record.ssid) {
                continue;
            }
            self.available.push(record);
        }
    }

    pub fn clear_available(&mut self) {
        self.available.clear();
    }

    /// Replace the allowed list, e.g. with entries loaded from disk.
    ///
    /// Duplicates and blank SSIDs are skipped. Any newly allowed SSID leaves
    /// the available list.
    pub fn set_allowed(&mut self, entries: Vec<AllowedEntry>) {
        self.allowed.clear();
        for entry in entries {
            if entry.ssid.trim().is_empty() || self.is_allowed(&entry.ssid) {
                continue;
            }
            self.allowed.push(entry);
        }
        let allowed = &self.allowed;
        self.available
            .retain(|r| !allowed.iter().any(|e| e.ssid == r.ssid));
    }

    /// Move an SSID into the allowed list.
    ///
    /// Returns `false` if it was already allowed.
    pub fn allow(&mut self, ssid: &str) -> bool {
        if self.is_allowed(ssid) {
            return false;
        }
        self.available.retain(|r| r.ssid != ssid);
        self.allowed.push(AllowedEntry::new(ssid));
        true
    }

    /// Move an allowed SSID back to the available list as a placeholder record.
    ///
    /// Returns `false` if it was not allowed.
    pub fn remove(&mut self, ssid: &str) -> bool {
        let Some(index) = self.allowed.iter().position(|e| e.ssid == ssid) else {
            return false;
        };
        let entry = self.allowed.remove(index);
        self.available.push(entry.to_record());
        true
    }

    /// Drop every allowed entry. The SSIDs are not moved to the available list.
    pub fn clear_allowed(&mut self) {
        self.allowed.clear();
    }

    /// Check that no SSID appears in both collections.
    pub fn is_disjoint(&self) -> bool {
        !self.available.iter().any(|r| self.is_allowed(&r.ssid))
    }
}
