//! Runtime configuration for the store and the display tool.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the preset catalog.
pub const STORE_FILE_NAME: &str = "resolutions.json";

/// Where QRes is installed unless told otherwise.
pub const DEFAULT_TOOL_PATH: &str = r"C:\Tools\QRes\QRes.exe";

/// Default time the display tool gets before it is killed.
pub const DEFAULT_APPLY_TIMEOUT: Duration = Duration::from_secs(30);

/// Location of the preset catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(default_store_path())
    }
}

/// How the external display tool is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyConfig {
    /// Path to the QRes-compatible executable.
    pub tool: PathBuf,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    /// Discard the tool's stdout/stderr instead of passing them through.
    pub quiet: bool,
}

impl ApplyConfig {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            timeout: Some(DEFAULT_APPLY_TIMEOUT),
            quiet: false,
        }
    }

    /// Set the timeout from milliseconds, where zero disables it.
    pub fn with_timeout_ms(mut self, millis: u64) -> Self {
        self.timeout = (millis > 0).then(|| Duration::from_millis(millis));
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL_PATH)
    }
}

/// Get the default catalog path: `resolutions.json` next to the running
/// executable, or in the working directory if the executable can't be located.
pub fn default_store_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
}
