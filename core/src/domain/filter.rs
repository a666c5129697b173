//! OS filter listing model.

use serde::{Deserialize, Serialize};

/// Filters currently configured in the OS, as listed by `wlan show filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    /// SSIDs on the allow list.
    pub allowed: Vec<String>,
    /// SSIDs on the block list.
    pub blocked: Vec<String>,
    /// A denyall filter is present, so only allowed SSIDs are visible.
    pub deny_all: bool,
}

impl FilterReport {
    /// All SSIDs with any filter, allow list first.
    pub fn all_ssids(&self) -> Vec<String> {
        self.allowed.iter().chain(self.blocked.iter()).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.blocked.is_empty() && !self.deny_all
    }
}
