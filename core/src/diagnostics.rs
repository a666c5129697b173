//! Process-wide fault diagnostics.
//!
//! Unhandled faults are appended to a plain-text log with a timestamp and a
//! source tag, and reported to the user on stderr. Everything here is best
//! effort: a log that cannot be written is skipped silently.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;
use tracing::error;

/// Append-only fault log.
#[derive(Debug, Clone)]
pub struct FaultLog {
    path: PathBuf,
}

impl FaultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a fault entry: `[<timestamp>] <source>: <message>` followed by a blank line.
    pub fn record(&self, source: &str, message: &str) {
        let entry = format!("[{}] {}: {}\n\n", timestamp(), source, message);
        self.append(&entry);
    }

    /// Note that the application started.
    pub fn record_startup(&self) {
        self.append(&format!("Application starting at {}\n", timestamp()));
    }

    fn append(&self, text: &str) {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            let _ = std::fs::create_dir_all(dir);
        }
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(text.as_bytes()));
        if let Err(e) = result {
            tracing::debug!(path = %self.path.display(), error = %e, "fault log not written");
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// User-facing fault notices.
///
/// Notices go to stderr unless capture is on, in which case they queue up
/// for a front end that owns the terminal (e.g. a raw-mode TUI).
#[derive(Debug, Clone, Default)]
pub struct FaultNotices {
    captured: Arc<Mutex<Option<Vec<String>>>>,
}

impl FaultNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue notices instead of printing them.
    pub fn capture(&self) {
        let mut captured = self.captured.lock();
        if captured.is_none() {
            *captured = Some(Vec::new());
        }
    }

    /// Stop capturing and return whatever was still queued.
    pub fn release(&self) -> Vec<String> {
        self.captured.lock().take().unwrap_or_default()
    }

    /// Drain queued notices while capture stays on.
    pub fn take(&self) -> Vec<String> {
        self.captured
            .lock()
            .as_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Show a fault to the user, or queue it while capture is on.
    pub fn report(&self, message: &str) {
        let text = format!("An error occurred: {}", message);
        match self.captured.lock().as_mut() {
            Some(queue) => queue.push(text),
            None => eprintln!("{}", text),
        }
    }
}

/// Route panics to the fault log and to `notices`.
///
/// Panics inside spawned tasks are recorded too; the runtime turns them into
/// a failed join instead of ending the process.
pub fn install_panic_hook(log: FaultLog, notices: FaultNotices) {
    std::panic::set_hook(Box::new(move |info| {
        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };

        let thread = std::thread::current();
        let source = format!("panic in thread '{}'", thread.name().unwrap_or("<unnamed>"));
        let detail = match info.location() {
            Some(location) => format!("{}\n  at {}", message, location),
            None => message.clone(),
        };

        error!(%source, %detail, "unhandled fault");
        log.record(&source, &detail);
        notices.report(&message);
    }));
}
