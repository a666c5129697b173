//! Workflow status, events and action outcomes.

use serde::{Deserialize, Serialize};

/// Progress of the workflow as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStatus {
    /// An operation is running; actions are rejected until it finishes.
    pub busy: bool,
    /// Last status message.
    pub message: String,
}

impl WorkflowStatus {
    pub fn idle(message: impl Into<String>) -> Self {
        Self {
            busy: false,
            message: message.into(),
        }
    }

    pub fn busy(message: impl Into<String>) -> Self {
        Self {
            busy: true,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.busy {
            write!(f, "[busy] {}", self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

/// Change notifications queued for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// Busy flag or status message changed.
    StatusChanged(WorkflowStatus),
    /// The available network list was replaced or modified.
    AvailableChanged,
    /// The allowed list was modified.
    AllowedChanged,
}

/// Result of invoking a workflow action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran to completion.
    Done,
    /// The action ran but a step failed; the message is also the status line.
    Failed(String),
    /// Preconditions were not met (e.g. nothing selected); nothing happened.
    NotApplicable(&'static str),
    /// Another operation is still running; nothing happened.
    Busy,
}

impl ActionOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionOutcome::Done)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ActionOutcome::Failed(_))
    }
}
