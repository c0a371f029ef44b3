//! Display mode switching through an external QRes-compatible tool.

use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use log::{info, warn};
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::ApplyConfig;
use crate::error::ApplyError;
use crate::types::Preset;

/// Successful mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub preset: Preset,
    pub elapsed: Duration,
}

/// Runs the display tool for a preset and classifies its exit status.
#[derive(Debug, Clone)]
pub struct ApplyService {
    config: ApplyConfig,
}

impl ApplyService {
    pub fn new(config: ApplyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApplyConfig {
        &self.config
    }

    /// Arguments passed to the tool, in the order it expects them.
    pub fn command_args(preset: &Preset) -> [String; 3] {
        [
            format!("/x:{}", preset.width()),
            format!("/y:{}", preset.height()),
            format!("/r:{}", preset.refresh_rate()),
        ]
    }

    /// Full command line as it would be run, tool path first.
    pub fn command_line(&self, preset: &Preset) -> Vec<String> {
        let mut line = vec![self.config.tool.display().to_string()];
        line.extend(Self::command_args(preset));
        line
    }

    /// Switch the display to `preset` and wait for the tool to finish.
    ///
    /// The child is killed if the timeout elapses, and also if this future is
    /// dropped before the tool exits.
    pub async fn apply(&self, preset: &Preset) -> Result<ApplyOutcome, ApplyError> {
        let args = Self::command_args(preset);
        info!("Running {} {}", self.config.tool.display(), args.join(" "));

        let mut command = Command::new(&self.config.tool);
        command.args(&args).stdin(Stdio::null()).kill_on_drop(true);
        if self.config.quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let started = Instant::now();
        let mut child = command.spawn().map_err(|source| ApplyError::Launch {
            tool: self.config.tool.clone(),
            source,
        })?;

        let waited = match self.config.timeout {
            Some(limit) => match timeout(limit, child.wait()).await {
                Ok(waited) => waited,
                Err(_) => {
                    warn!(
                        "Display tool exceeded {}ms, killing it",
                        limit.as_millis()
                    );
                    if let Err(e) = child.kill().await {
                        warn!("Failed to kill display tool: {}", e);
                    }
                    return Err(ApplyError::Timeout { after: limit });
                }
            },
            None => child.wait().await,
        };

        let status = waited.map_err(ApplyError::Wait)?;
        classify(status)?;

        let elapsed = started.elapsed();
        info!("Applied {} in {}ms", preset, elapsed.as_millis());

        Ok(ApplyOutcome {
            preset: *preset,
            elapsed,
        })
    }
}

/// Only the exit status is authoritative; the tool's output is ignored.
fn classify(status: ExitStatus) -> Result<(), ApplyError> {
    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => {
            warn!("Display tool exited with code {}", code);
            Err(ApplyError::ExitCode { code })
        }
        None => {
            warn!("Display tool was terminated by a signal");
            Err(ApplyError::Terminated)
        }
    }
}
