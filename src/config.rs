use serde::{Deserialize, Serialize};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_STICK_THRESHOLD: f64 = 40.0;

/// DOM ids the client binds to. These are the only structural contract
/// with the surrounding page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub output: String,
    pub status: String,
    pub form: String,
    pub input: String,
    pub clear: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            output: "output".to_string(),
            status: "output-status".to_string(),
            form: "command-form".to_string(),
            input: "command-input".to_string(),
            clear: "clear-btn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub poll_interval_ms: u64,
    /// Distance from the bottom (in CSS pixels) still treated as "at the bottom".
    pub stick_threshold: f64,
    pub output_path: String,
    pub input_path: String,
    pub log_level: String,
    pub elements: ElementIds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            stick_threshold: DEFAULT_STICK_THRESHOLD,
            output_path: "/api/output".to_string(),
            input_path: "/api/input".to_string(),
            log_level: "info".to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl ClientConfig {
    /// Partial documents are fine; anything missing keeps its default.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        // A zero period would spin the timer.
        std::time::Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
