//! The `netsh wlan` command vocabulary.

/// Prefix of the text a command runner returns instead of output when the command failed.
pub const ERROR_PREFIX: &str = "Error: ";

/// Substring that marks any command output as a failure.
///
/// netsh prints its own failures to standard output, so this also catches
/// those. A network whose name contains "Error" is misreported as a failure.
const ERROR_MARKER: &str = "Error";

/// Check whether command output signals a failure.
pub fn is_error_output(output: &str) -> bool {
    output.contains(ERROR_MARKER)
}

/// The cause carried by a runner failure, if `output` is one.
///
/// Only text starting with [`ERROR_PREFIX`] counts. Reports are free to
/// mention "Error" elsewhere, e.g. in a network name.
pub fn runner_failure(output: &str) -> Option<&str> {
    output
        .strip_prefix(ERROR_PREFIX)
        .map(|cause| cause.lines().next().unwrap_or("").trim())
}

/// Network type a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkType {
    Infrastructure,
    Adhoc,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Infrastructure => "infrastructure",
            NetworkType::Adhoc => "adhoc",
        }
    }
}

/// A `netsh wlan` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WlanCommand {
    /// `wlan show networks mode=bssid`
    ShowNetworks,
    /// `wlan show filters`
    ShowFilters,
    /// `wlan add filter permission=allow ssid="<ssid>" networktype=infrastructure`
    AddAllow(String),
    /// `wlan delete filter permission=allow ssid="<ssid>" networktype=infrastructure`
    DeleteAllow(String),
    /// `wlan delete filter permission=block ssid="<ssid>" networktype=infrastructure`
    DeleteBlock(String),
    /// `wlan add filter permission=denyall networktype=<type>`
    AddDenyAll(NetworkType),
    /// `wlan delete filter permission=denyall networktype=<type>`
    DeleteDenyAll(NetworkType),
}

impl WlanCommand {
    /// Argument vector passed to the executable.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec!["wlan".into()];
        match self {
            WlanCommand::ShowNetworks => {
                args.extend(["show".into(), "networks".into(), "mode=bssid".into()]);
            }
            WlanCommand::ShowFilters => {
                args.extend(["show".into(), "filters".into()]);
            }
            WlanCommand::AddAllow(ssid) => {
                args.extend(ssid_filter("add", "allow", ssid));
            }
            WlanCommand::DeleteAllow(ssid) => {
                args.extend(ssid_filter("delete", "allow", ssid));
            }
            WlanCommand::DeleteBlock(ssid) => {
                args.extend(ssid_filter("delete", "block", ssid));
            }
            WlanCommand::AddDenyAll(network_type) => {
                args.extend(deny_all_filter("add", *network_type));
            }
            WlanCommand::DeleteDenyAll(network_type) => {
                args.extend(deny_all_filter("delete", *network_type));
            }
        }
        args
    }
}

impl std::fmt::Display for WlanCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

fn ssid_filter(action: &str, permission: &str, ssid: &str) -> [String; 5] {
    [
        action.to_string(),
        "filter".to_string(),
        format!("permission={}", permission),
        format!("ssid=\"{}\"", ssid),
        format!("networktype={}", NetworkType::Infrastructure.as_str()),
    ]
}

fn deny_all_filter(action: &str, network_type: NetworkType) -> [String; 4] {
    [
        action.to_string(),
        "filter".to_string(),
        "permission=denyall".to_string(),
        format!("networktype={}", network_type.as_str()),
    ]
}
