//! Parsers for the human-readable reports printed by `netsh wlan`.
//!
//! Both parsers are tolerant: lines that do not match an expected pattern are
//! skipped, and missing optional fields fall back to defaults instead of
//! failing the whole report.

mod filters;
mod networks;

pub use filters::{parse_filter_ssids, parse_filters};
pub use networks::parse_networks;

/// Split command output into non-empty lines, treating `\r` and `\n` alike.
fn report_lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
}
