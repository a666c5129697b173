//! Parser for `netsh wlan show filters`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::FilterReport;

use super::report_lines;

/// A filter entry line: `SSID : HomeNet` or `SSID: "HomeNet", Type: Infrastructure`.
static SSID_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*SSID\s*:\s*(.+?)\s*$").expect("valid filter SSID regex"));

/// Quoted SSID followed by optional trailing attributes.
static QUOTED_SSID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(.*)"\s*(?:,.*)?$"#).expect("valid quoted SSID regex"));

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Allow,
    Block,
    DenyAll,
}

fn section_for(line: &str) -> Option<Section> {
    let lower = line.trim().to_lowercase();
    if lower.starts_with("allow list") {
        Some(Section::Allow)
    } else if lower.starts_with("block list") {
        Some(Section::Block)
    } else if lower.starts_with("denyall list") {
        Some(Section::DenyAll)
    } else {
        None
    }
}

fn extract_ssid(line: &str) -> Option<String> {
    let caps = SSID_LINE.captures(line)?;
    let value = &caps[1];
    let ssid = match QUOTED_SSID.captures(value) {
        Some(quoted) => quoted[1].to_string(),
        None => value.to_string(),
    };
    Some(ssid)
}

/// Every SSID with a filter, in report order, each listed once.
///
/// Used to reset filter state: each returned SSID gets both its allow and
/// block filter deleted.
pub fn parse_filter_ssids(output: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    report_lines(output)
        .filter_map(extract_ssid)
        .filter(|ssid| seen.insert(ssid.clone()))
        .collect()
}

/// Parse the filter listing into allow list, block list and denyall state.
///
/// Expected format:
/// ```text
/// Allow list on the system (user)
/// -------------------------------
///     SSID: "HomeNet", Type: Infrastructure
///
/// Block list on the system (user)
/// -------------------------------
///     SSID: "Neighbour", Type: Infrastructure
///     Denyall: Type: Infrastructure
/// ```
///
/// SSIDs found outside a known section are treated as allowed.
pub fn parse_filters(output: &str) -> FilterReport {
    let mut report = FilterReport::default();
    let mut section = Section::None;

    for line in report_lines(output) {
        if let Some(next) = section_for(line) {
            section = next;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.starts_with('-') || trimmed.eq_ignore_ascii_case("<none>") {
            continue;
        }

        if trimmed.to_lowercase().starts_with("denyall") || section == Section::DenyAll {
            report.deny_all = true;
            continue;
        }

        let Some(ssid) = extract_ssid(line) else {
            continue;
        };

        let list = match section {
            Section::Block => &mut report.blocked,
            _ => &mut report.allowed,
        };
        if !list.contains(&ssid) {
            list.push(ssid);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Allow list on the system (group policy)
---------------------------------------
    <None>

Allow list on the system (user)
-------------------------------
    SSID: \"HomeNet\", Type: Infrastructure
    SSID: \"Cafe, Corner\", Type: Infrastructure

Block list on the system (group policy)
---------------------------------------
    <None>

Block list on the system (user)
-------------------------------
    SSID: \"Neighbour\", Type: Infrastructure
    Denyall: Type: Infrastructure
";

    #[test]
    fn test_parse_filter_ssids_plain_format() {
        let output = "Filters\n    SSID : HomeNet\n    SSID : CafeWiFi\n";
        assert_eq!(parse_filter_ssids(output), vec!["HomeNet", "CafeWiFi"]);
    }

    #[test]
    fn test_parse_filter_ssids_quoted_format() {
        assert_eq!(
            parse_filter_ssids(SAMPLE),
            vec!["HomeNet", "Cafe, Corner", "Neighbour"]
        );
    }

    #[test]
    fn test_parse_filter_ssids_ignores_bssid_lines() {
        let output = "    BSSID : aa:bb:cc:dd:ee:ff\n    SSID : HomeNet\n    SSID : HomeNet\n";
        assert_eq!(parse_filter_ssids(output), vec!["HomeNet"]);
    }

    #[test]
    fn test_parse_filters_sections() {
        let report = parse_filters(SAMPLE);
        assert_eq!(report.allowed, vec!["HomeNet", "Cafe, Corner"]);
        assert_eq!(report.blocked, vec!["Neighbour"]);
        assert!(report.deny_all);
        assert_eq!(report.all_ssids().len(), 3);
    }

    #[test]
    fn test_parse_filters_empty() {
        let output = "\
Allow list on the system (user)
-------------------------------
    <None>

Block list on the system (user)
-------------------------------
    <None>
";
        let report = parse_filters(output);
        assert!(report.is_empty());
        assert!(parse_filter_ssids(output).is_empty());
    }
}
