//! Domain layer - networks, the allow-list and the netsh command vocabulary.
//!
//! Nothing here performs I/O.

mod command;
mod filter;
mod lists;
mod network;
mod status;

// Re-export all domain types
pub use command::{is_error_output, runner_failure, NetworkType, WlanCommand, ERROR_PREFIX};
pub use filter::FilterReport;
pub use lists::NetworkLists;
pub use network::{
    AllowedEntry, NetworkRecord, SECURITY_UNKNOWN, SIGNAL_SAVED, SIGNAL_UNAVAILABLE,
};
pub use status::{ActionOutcome, WorkflowEvent, WorkflowStatus};
