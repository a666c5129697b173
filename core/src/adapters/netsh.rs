//! netsh command runner.
//!
//! Runs the network-configuration executable and hands its standard output
//! back as text. Failures never surface as `Err`; they come back as a string
//! starting with [`ERROR_PREFIX`] so callers treat every outcome uniformly.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::ERROR_PREFIX;
use crate::ports::CommandRunnerPort;

/// Default executable name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "netsh";

/// Keeps netsh from flashing a console window when launched from a GUI process.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs `netsh` (or a configured replacement) and captures its output.
pub struct NetshRunner {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl NetshRunner {
    /// Create a runner for `netsh` with no timeout.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            timeout: None,
        }
    }

    /// Create a runner for a custom executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Bound each invocation. `None` waits for the process to exit on its own.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The executable this runner invokes.
    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    async fn execute(&self, args: &[String]) -> std::result::Result<String, String> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let output = match self.timeout {
            Some(limit) => timeout(limit, command.output())
                .await
                .map_err(|_| format!("{} timed out after {:?}", self.program.display(), limit))?,
            None => command.output().await,
        }
        .map_err(|e| format!("Failed to run {}: {}", self.program.display(), e))?;

        // netsh writes in the console code page; undecodable bytes become U+FFFD
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            return Err(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stdout.trim()
            ));
        }

        Ok(stdout)
    }
}

impl Default for NetshRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunnerPort for NetshRunner {
    async fn run(&self, args: &[String]) -> String {
        debug!(program = %self.program.display(), args = %args.join(" "), "running command");

        match self.execute(args).await {
            Ok(stdout) => stdout,
            Err(cause) => {
                warn!(args = %args.join(" "), %cause, "command failed");
                format!("{}{}", ERROR_PREFIX, cause)
            }
        }
    }
}
