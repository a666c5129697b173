//! Parser for `netsh wlan show networks mode=bssid`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{NetworkRecord, SECURITY_UNKNOWN, SIGNAL_UNAVAILABLE};

use super::report_lines;

/// `SSID 1 : MyNetwork` at the start of a line. Indented `BSSID 1 : ...` lines never match.
static SSID_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SSID\s+\d+\s*:\s*(.*)$").expect("valid SSID header regex"));

static SIGNAL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+Signal\s*:\s*(.+)$").expect("valid signal regex"));

static AUTH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+Authentication\s*:\s*(.+)$").expect("valid authentication regex")
});

/// Fields collected for the SSID block currently being read.
struct NetworkBlock {
    ssid: String,
    signal: Option<String>,
    auth: Option<String>,
}

impl NetworkBlock {
    fn new(ssid: &str) -> Self {
        Self {
            ssid: ssid.trim().to_string(),
            signal: None,
            auth: None,
        }
    }

    fn into_record(self) -> NetworkRecord {
        NetworkRecord::new(
            self.ssid,
            self.signal.unwrap_or_else(|| SIGNAL_UNAVAILABLE.to_string()),
            self.auth.unwrap_or_else(|| SECURITY_UNKNOWN.to_string()),
        )
    }
}

/// Parse the output of `netsh wlan show networks mode=bssid`.
///
/// Returns one record per distinct SSID in order of first appearance.
/// A block without a `Signal` line gets `"N/A"`, one without an
/// `Authentication` line gets `"Unknown"`. When a network lists several
/// BSSIDs the last `Signal` line wins.
///
/// Expected format:
/// ```text
/// Interface name : Wi-Fi
/// There are 2 networks currently visible.
///
/// SSID 1 : HomeNet
///     Network type            : Infrastructure
///     Authentication          : WPA2-Personal
///     Encryption              : CCMP
///     BSSID 1                 : aa:bb:cc:dd:ee:ff
///          Signal             : 80%
///          Channel            : 36
///
/// SSID 2 : CafeWiFi
/// ```
pub fn parse_networks(output: &str) -> Vec<NetworkRecord> {
    let mut records = Vec::new();
    let mut current: Option<NetworkBlock> = None;

    for line in report_lines(output) {
        if let Some(caps) = SSID_HEADER.captures(line) {
            if let Some(block) = current.take() {
                records.push(block.into_record());
            }
            current = Some(NetworkBlock::new(&caps[1]));
            continue;
        }

        // Detail lines before the first header (interface banner etc.) are ignored.
        let Some(block) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = SIGNAL_LINE.captures(line) {
            block.signal = Some(caps[1].trim().to_string());
        } else if let Some(caps) = AUTH_LINE.captures(line) {
            block.auth = Some(caps[1].trim().to_string());
        }
    }

    if let Some(block) = current {
        records.push(block.into_record());
    }

    // Deduplicate by SSID, keeping the first occurrence
    let mut seen: HashSet<String> = HashSet::new();
    records.retain(|r| seen.insert(r.ssid.clone()));
    records
}
