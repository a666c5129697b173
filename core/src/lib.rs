//! WiFiFilter Core Library
//!
//! Curate an allow-list of wireless networks and enforce it with OS-level
//! `netsh wlan` filters. Provides functionality to:
//! - Scan nearby networks and parse the `netsh` report
//! - Keep the available and allowed lists disjoint
//! - Persist the allowed list as a plain-text file
//! - Block every network except the allowed ones, or clear all filters
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! Filters are applied through `netsh`, so only Windows changes real state.
//! The executable is configurable, which keeps the rest usable elsewhere.

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod parser;

#[cfg(test)]
mod test_support;

// Re-export domain types (primary API)
pub use domain::{
    ActionOutcome, AllowedEntry, FilterReport, NetworkLists, NetworkRecord, WorkflowEvent,
    WorkflowStatus,
};

// Re-export other commonly used types
pub use adapters::{AllowedListStore, NetshRunner};
pub use application::{FilterController, Workflow};
pub use config::{Config, ConfigStore};
pub use diagnostics::{install_panic_hook, FaultLog, FaultNotices};
pub use error::{Error, Result};

/// The workflow wired to the real netsh runner and file store.
pub type NetshWorkflow = Workflow<NetshRunner, AllowedListStore>;
