//! Network and allow-list domain models.

use serde::{Deserialize, Serialize};

/// Signal shown when a report block carries no `Signal` line.
pub const SIGNAL_UNAVAILABLE: &str = "N/A";

/// Signal shown for networks that come from the saved allow-list rather than a scan.
pub const SIGNAL_SAVED: &str = "Saved";

/// Security shown when a report block carries no `Authentication` line.
pub const SECURITY_UNKNOWN: &str = "Unknown";

// ============================================================================
// NetworkRecord
// ============================================================================

/// A wireless network seen during a scan.
///
/// Identity is the SSID alone (case-sensitive, exact match). Records are
/// rebuilt on every scan and never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkRecord {
    /// Human-readable network name.
    pub ssid: String,
    /// Signal quality as reported by the OS (e.g. "80%").
    pub signal: String,
    /// Authentication scheme as reported by the OS (e.g. "WPA2-Personal").
    pub security: String,
}

impl NetworkRecord {
    /// Create a record from scan results.
    pub fn new(
        ssid: impl Into<String>,
        signal: impl Into<String>,
        security: impl Into<String>,
    ) -> Self {
        Self {
            ssid: ssid.into(),
            signal: signal.into(),
            security: security.into(),
        }
    }

    /// Create a placeholder record for a network known only by name.
    pub fn saved(ssid: impl Into<String>) -> Self {
        Self::new(ssid, SIGNAL_SAVED, SECURITY_UNKNOWN)
    }

    /// Check if this record matches a search query.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query_lower = query.to_lowercase();
        self.ssid.to_lowercase().contains(&query_lower)
            || self.security.to_lowercase().contains(&query_lower)
    }
}

impl std::fmt::Display for NetworkRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.ssid, self.signal, self.security)
    }
}

// ============================================================================
// AllowedEntry
// ============================================================================

/// An SSID the user has approved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllowedEntry {
    pub ssid: String,
}

impl AllowedEntry {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self { ssid: ssid.into() }
    }

    /// Turn the entry back into a displayable record with placeholder details.
    pub fn to_record(&self) -> NetworkRecord {
        NetworkRecord::saved(self.ssid.clone())
    }
}

impl From<&NetworkRecord> for AllowedEntry {
    fn from(record: &NetworkRecord) -> Self {
        Self::new(record.ssid.clone())
    }
}

impl std::fmt::Display for AllowedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.ssid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_placeholder() {
        let record = NetworkRecord::saved("HomeNet");
        assert_eq!(record.ssid, "HomeNet");
        assert_eq!(record.signal, "Saved");
        assert_eq!(record.security, "Unknown");
    }

    #[test]
    fn test_entry_round_trip_keeps_ssid() {
        let record = NetworkRecord::new("CafeWiFi", "40%", "Open");
        let entry = AllowedEntry::from(&record);
        assert_eq!(entry.ssid, "CafeWiFi");
        assert_eq!(entry.to_record(), NetworkRecord::saved("CafeWiFi"));
    }

    #[test]
    fn test_matches_search() {
        let record = NetworkRecord::new("HomeNet", "80%", "WPA2-Personal");
        assert!(record.matches_search(""));
        assert!(record.matches_search("home"));
        assert!(record.matches_search("wpa2"));
        assert!(!record.matches_search("cafe"));
    }

    #[test]
    fn test_display() {
        let record = NetworkRecord::new("HomeNet", "80%", "WPA2");
        assert_eq!(record.to_string(), "HomeNet (80%, WPA2)");
    }
}
