//! Application layer - Use case services.
//!
//! [`FilterController`] turns filter operations into `netsh wlan` command
//! sequences. [`Workflow`] owns the network lists and runs one user action
//! at a time on top of it.

mod filter_controller;
mod workflow;

pub use filter_controller::FilterController;
pub use workflow::Workflow;
