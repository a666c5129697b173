//! TUI application state.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;
use wififilter_core::{
    AllowedEntry, FaultNotices, NetshWorkflow, NetworkRecord, WorkflowEvent, WorkflowStatus,
};

/// Which list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Available,
    Allowed,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Initialize,
    Scan,
    Allow,
    Remove,
    Apply,
    Clear,
}

pub struct App {
    workflow: Arc<NetshWorkflow>,
    faults: FaultNotices,
    pub available: Vec<NetworkRecord>,
    pub allowed: Vec<AllowedEntry>,
    pub status: WorkflowStatus,
    pub focus: Pane,
    pub selected_available: usize,
    pub selected_allowed: usize,
    pub search_query: String,
    searching: bool,
    confirming_clear: bool,
    notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(workflow: Arc<NetshWorkflow>, faults: FaultNotices) -> Self {
        Self {
            workflow,
            faults,
            available: Vec::new(),
            allowed: Vec::new(),
            status: WorkflowStatus::default(),
            focus: Pane::Available,
            selected_available: 0,
            selected_allowed: 0,
            search_query: String::new(),
            searching: false,
            confirming_clear: false,
            notice: None,
            should_quit: false,
        }
    }

    /// Load the saved list and run the first scan in the background.
    pub fn start(&mut self) {
        self.dispatch(Action::Initialize);
    }

    /// Pull pending workflow events into the local snapshot.
    pub fn sync(&mut self) {
        for event in self.workflow.take_events() {
            match event {
                WorkflowEvent::StatusChanged(status) => self.status = status,
                WorkflowEvent::AvailableChanged => {
                    self.available = self.workflow.available();
                }
                WorkflowEvent::AllowedChanged => {
                    self.allowed = self.workflow.allowed();
                }
            }
        }
        if let Some(fault) = self.faults.take().pop() {
            self.notice = Some(fault);
        }
        self.clamp_selection();
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Waiting for the user to confirm a clear.
    pub fn is_confirming_clear(&self) -> bool {
        self.confirming_clear
    }

    /// A one-off hint from the last key press, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Available networks matching the search query.
    pub fn filtered_available(&self) -> Vec<&NetworkRecord> {
        self.available
            .iter()
            .filter(|n| n.matches_search(&self.search_query))
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        if self.confirming_clear {
            self.confirming_clear = false;
            if key.code == KeyCode::Char('y') {
                self.dispatch(Action::Clear);
            } else {
                self.notice = Some("Clear cancelled".into());
            }
            return;
        }

        if self.searching {
            match key.code {
                KeyCode::Enter => self.searching = false,
                KeyCode::Esc => {
                    self.searching = false;
                    self.search_query.clear();
                }
                KeyCode::Backspace => {
                    self.search_query.pop();
                }
                KeyCode::Char(c) => self.search_query.push(c),
                _ => {}
            }
            self.selected_available = 0;
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Pane::Available => Pane::Allowed,
                    Pane::Allowed => Pane::Available,
                };
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('/') => {
                self.focus = Pane::Available;
                self.searching = true;
            }
            KeyCode::Char('a') => self.allow_selected(),
            KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('p') => {
                if self.workflow.can_apply() {
                    self.dispatch(Action::Apply);
                } else {
                    self.notice = Some("Allow at least one network before applying".into());
                }
            }
            KeyCode::Char('c') => {
                self.confirming_clear = true;
                self.notice =
                    Some("Remove every filter and forget the allowed list? (y/n)".into());
            }
            KeyCode::Char('r') => self.dispatch(Action::Scan),
            _ => {}
        }
    }

    fn allow_selected(&mut self) {
        let ssid = self
            .filtered_available()
            .get(self.selected_available)
            .map(|n| n.ssid.clone());
        self.workflow.select_available(ssid.as_deref());
        if self.workflow.can_allow() {
            self.dispatch(Action::Allow);
        } else {
            self.notice = Some("Select an available network first".into());
        }
    }

    fn remove_selected(&mut self) {
        let ssid = self
            .allowed
            .get(self.selected_allowed)
            .map(|e| e.ssid.clone());
        self.workflow.select_allowed(ssid.as_deref());
        if self.workflow.can_remove() {
            self.dispatch(Action::Remove);
        } else {
            self.notice = Some("Select an allowed network first".into());
        }
    }

    /// Run an action on the runtime; results arrive through [`sync`](Self::sync).
    fn dispatch(&mut self, action: Action) {
        if self.workflow.is_busy() {
            self.notice = Some("Busy, please wait".into());
            return;
        }

        let workflow = Arc::clone(&self.workflow);
        tokio::spawn(async move {
            let outcome = match action {
                Action::Initialize => workflow.initialize().await,
                Action::Scan => workflow.scan().await,
                Action::Allow => workflow.allow().await,
                Action::Remove => workflow.remove().await,
                Action::Apply => workflow.apply().await,
                Action::Clear => workflow.clear().await,
            };
            if !outcome.is_done() {
                debug!(?action, ?outcome, "action did not complete");
            }
        });
    }

    fn move_selection(&mut self, delta: isize) {
        let len = match self.focus {
            Pane::Available => self.filtered_available().len(),
            Pane::Allowed => self.allowed.len(),
        };
        let selected = match self.focus {
            Pane::Available => &mut self.selected_available,
            Pane::Allowed => &mut self.selected_allowed,
        };
        if len == 0 {
            *selected = 0;
            return;
        }
        *selected = selected.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_selection(&mut self) {
        let available = self.filtered_available().len();
        self.selected_available = self.selected_available.min(available.saturating_sub(1));
        self.selected_allowed = self.selected_allowed.min(self.allowed.len().saturating_sub(1));
    }
}
